use crate::core::{FromJson, ToJson, WireFormat};
use crate::utils::error::{DecodeError, EncodeError};

/// Text-level codec engine: pairs the tree codec with a wire format port.
///
/// Parsing and rendering of raw text live behind the port; this engine only
/// sequences the two hops and reports progress. Each call owns its trees,
/// so independent encodes and decodes need no coordination.
pub struct Codec<W: WireFormat> {
    wire: W,
}

impl<W: WireFormat> Codec<W> {
    pub fn new(wire: W) -> Self {
        Self { wire }
    }

    /// Parses text into a value tree and decodes it. Parser failures
    /// surface as `DecodeError::MalformedInput`.
    pub fn decode_str<T: FromJson>(&self, text: &str) -> Result<T, DecodeError> {
        tracing::debug!("parsing {} bytes of input", text.len());
        let tree = self.wire.parse(text)?;
        let decoded = T::from_json(&tree)?;
        tracing::debug!("decode complete");
        Ok(decoded)
    }

    pub fn encode_to_string<T: ToJson>(&self, value: &T) -> Result<String, EncodeError> {
        let tree = value.to_json()?;
        let rendered = self.wire.render(&tree)?;
        tracing::debug!("encoded {} bytes", rendered.len());
        Ok(rendered)
    }

    pub fn encode_to_string_pretty<T: ToJson>(&self, value: &T) -> Result<String, EncodeError> {
        let tree = value.to_json()?;
        let rendered = self.wire.render_pretty(&tree)?;
        tracing::debug!("encoded {} bytes (pretty)", rendered.len());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonWire;
    use crate::domain::model::{Body, EyeColor, Family, Person, PhysicalAttributes};

    fn sample_person() -> Person {
        Person {
            name: "John Doe".to_string(),
            age: 30,
            body: Body {
                weight: 70.5,
                height: 1.75,
                physical_attributes: PhysicalAttributes {
                    eye_color: EyeColor::Blue,
                    hair_color: "Brown".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_person_round_trip_identity() {
        let codec = Codec::new(JsonWire);
        let person = sample_person();
        let text = codec.encode_to_string(&person).unwrap();
        let decoded: Person = codec.decode_str(&text).unwrap();
        assert_eq!(decoded, person);
    }

    #[test]
    fn test_family_round_trip_identity() {
        let codec = Codec::new(JsonWire);
        let family = Family {
            family_name: "Doe".to_string(),
            father: Some(sample_person()),
            mother: None,
            children: vec![sample_person(), sample_person()],
        };
        let text = codec.encode_to_string(&family).unwrap();
        let decoded: Family = codec.decode_str(&text).unwrap();
        assert_eq!(decoded, family);
    }

    #[test]
    fn test_malformed_input_surfaces_as_typed_error() {
        let codec = Codec::new(JsonWire);
        let err = codec.decode_str::<Person>("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)));
    }

    #[test]
    fn test_pretty_output_decodes_back() {
        let codec = Codec::new(JsonWire);
        let person = sample_person();
        let pretty = codec.encode_to_string_pretty(&person).unwrap();
        assert!(pretty.contains('\n'));
        let decoded: Person = codec.decode_str(&pretty).unwrap();
        assert_eq!(decoded, person);
    }
}
