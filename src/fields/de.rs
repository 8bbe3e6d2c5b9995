use serde::{Deserialize, Deserializer, de::Visitor};

use super::ValueSet;

struct ValueSetVisitor;

impl<'de> Visitor<'de> for ValueSetVisitor {
    type Value = ValueSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("sequence of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = ValueSet::with_capacity(seq.size_hint().unwrap_or_default().min(64));

        // Duplicates collapse the same way as `insert`.
        while let Some(item) = seq.next_element::<String>()? {
            set.insert(item);
        }

        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ValueSet {
    fn deserialize<D>(deserializer: D) -> Result<ValueSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ValueSetVisitor)
    }
}
