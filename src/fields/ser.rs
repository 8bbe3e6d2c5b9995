use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::ValueSet;

impl Serialize for ValueSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;

        for item in &self.values {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
