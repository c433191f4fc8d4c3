use anyhow::Result;
use family_json::{
    Body, Codec, EyeColor, FromJson, JsonWire, Person, PhysicalAttributes, ToJson, Validate,
};

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
fn test_person_serialization() -> Result<()> {
    let person = sample_person();
    person.validate()?;

    let codec = Codec::new(JsonWire);
    let json_str = codec.encode_to_string(&person)?;

    assert!(json_str.contains(r#""name":"John Doe""#));
    assert!(json_str.contains(r#""age":30"#));
    assert!(json_str.contains(r#""weight":70.5"#));
    assert!(json_str.contains(r#""height":1.75"#));
    assert!(json_str.contains(r#""eyeColor":"Blue""#));
    assert!(json_str.contains(r#""hairColor":"Brown""#));
    Ok(())
}

#[test]
fn test_person_deserialization() -> Result<()> {
    let json = r#"
        {
            "name": "Jane Doe",
            "age": 25,
            "body": {
                "weight": 60.0,
                "height": 1.65,
                "physicalAttributes": {
                    "eyeColor": "Green",
                    "hairColor": "Blonde"
                }
            }
        }
    "#;

    let codec = Codec::new(JsonWire);
    let person: Person = codec.decode_str(json)?;
    person.validate()?;

    assert_eq!(person.name, "Jane Doe");
    assert_eq!(person.age, 25);
    assert_eq!(person.body.weight, 60.0);
    assert_eq!(person.body.height, 1.65);
    assert_eq!(person.body.physical_attributes.eye_color, EyeColor::Green);
    assert_eq!(person.body.physical_attributes.hair_color, "Blonde");
    Ok(())
}

#[test]
fn test_person_round_trip_identity() -> Result<()> {
    let codec = Codec::new(JsonWire);
    let person = sample_person();

    let text = codec.encode_to_string(&person)?;
    let decoded: Person = codec.decode_str(&text)?;

    assert_eq!(decoded, person);
    Ok(())
}

#[test]
fn test_scenario_decode_validate_reencode() -> Result<()> {
    let input = r#"{"name":"John Doe","age":30,"body":{"weight":70.5,"height":1.75,"physicalAttributes":{"eyeColor":"Blue","hairColor":"Brown"}}}"#;

    let codec = Codec::new(JsonWire);
    let person: Person = codec.decode_str(input)?;
    person.validate()?;

    let reencoded = codec.encode_to_string(&person)?;
    assert!(reencoded.contains(r#""age":30"#));
    assert!(reencoded.contains(r#""eyeColor":"Blue""#));
    // Member order is stable, so the full round trip is byte-identical here.
    assert_eq!(reencoded, input);
    Ok(())
}

#[test]
fn test_tree_level_round_trip() -> Result<()> {
    let person = sample_person();
    let tree = person.to_json()?;
    let decoded = Person::from_json(&tree)?;
    assert_eq!(decoded, person);
    Ok(())
}

#[test]
fn test_inner_composites_round_trip_on_their_own() -> Result<()> {
    let body = sample_person().body;
    assert_eq!(Body::from_json(&body.to_json()?)?, body);

    let attributes = body.physical_attributes.clone();
    assert_eq!(
        PhysicalAttributes::from_json(&attributes.to_json()?)?,
        attributes
    );
    Ok(())
}
