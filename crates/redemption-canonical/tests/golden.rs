use redemption_canonical::{
    encode_number, encode_string, sign, CodelessValidator, Signature, SigningKey,
};

const SECRET: &str = "+ON3JGqQtsoagk0Sgdd6gDkz/MHr95T+LeYmPzSkBB9Y/LMPNFiXRYc90I73DLUJDXTDDjNQ8DbYXYTkH4SNnuer43v4LmhPHhB5k/9vy5Pmtt2CnNAiylYIQK/Jm0xYhRsGUVmT9GzVx1CyeaxzfPkGsdszlcfy1HuaxGv/yjA=";

const FULL_QUERY: &str = "?PartnerId=partnerId&TransactionId=transaction%2fId&Currency=GBP&MemberId=memberId&OrderTotal=209.00&ItemsUNiDAYSDiscount=13.00&Code=ABC123&ItemsTax=34.50&ShippingGross=5.00&ShippingDiscount=3.00&ItemsGross=230.00&ItemsOtherDiscount=10.00&UNiDAYSDiscountPercentage=10.00&NewCustomer=true";

#[test]
fn hmac_sha512_matches_known_vector() {
    let key = SigningKey::from_bytes(b"key".to_vec()).unwrap();
    let signature = sign(b"The quick brown fox jumps over the lazy dog", &key);
    assert_eq!(
        signature.as_str(),
        "tCrwkFe6weLUFwjkipAuCbX/fxKrQopP6GZTxz3SSPuC+UilSfe3kaW0GRXuTR7Dk1NX5OIxclDQNyr6Lr7rOg=="
    );
}

#[test]
fn full_query_signature_is_stable() {
    let key = SigningKey::from_base64(SECRET).unwrap();
    let first = sign(FULL_QUERY.as_bytes(), &key);
    let second = sign(FULL_QUERY.as_bytes(), &key);
    assert_eq!(first, second);
    assert_eq!(
        first.as_str(),
        "Q82jSo08TYNWquRjgSxYQcDIUwxqrM5/exZXHuUOK27bwVBMiBIIUuNTJuMza7TALN2lSD4gyuQGpQTgSXavRQ=="
    );
    assert_eq!(
        encode_string(first.as_str()),
        "Q82jSo08TYNWquRjgSxYQcDIUwxqrM5%2fexZXHuUOK27bwVBMiBIIUuNTJuMza7TALN2lSD4gyuQGpQTgSXavRQ%3d%3d"
    );
}

#[test]
fn leading_question_mark_is_part_of_payload() {
    let key = SigningKey::from_base64(SECRET).unwrap();
    let with_prefix = sign(FULL_QUERY.as_bytes(), &key);
    let without_prefix = sign(FULL_QUERY[1..].as_bytes(), &key);
    assert_ne!(with_prefix, without_prefix);
}

#[test]
fn signature_serializes_as_plain_string() {
    let key = SigningKey::from_bytes(b"key".to_vec()).unwrap();
    let signature = sign(b"payload", &key);
    let json = serde_json::to_string(&signature).unwrap();
    assert_eq!(json, format!("\"{}\"", signature));
    let restored: Signature = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, signature);
}

#[test]
fn amounts_match_reference_rendering() {
    assert_eq!(encode_number(7.07777777).unwrap(), "7.08");
    assert_eq!(encode_number(5.0).unwrap(), "5.00");
    assert_eq!(encode_number(209.0).unwrap(), "209.00");
}

#[test]
fn codeless_hash_matches_reference() {
    let validator = CodelessValidator::new(SECRET).unwrap();
    assert_eq!(
        validator.hash("abc", "1395741712").as_str(),
        "/F3IUNm8cKjrj7RRU/vaapkTmd/Q1UqQ7CIa8H1A6nUsr4tlE6Bajfw8XcxV2s9BZfWHfQHAcbu7cLfE4MlgXw=="
    );
    assert_eq!(
        validator.hash("student/1", "1500000000").as_str(),
        "N+wFKCwhcNbDbTbezyXgNA+8atjlfpgNTO5UOqB6gFoWRU8wVrpHAICHM93z5HNomOBRf/3eSjYwWWBfOMOqBw=="
    );
}

#[test]
fn codeless_validate_accepts_only_matching_hash() {
    let validator = CodelessValidator::new(SECRET).unwrap();
    let hash = validator.hash("student/1", "1500000000");
    assert!(validator.validate("student/1", "1500000000", hash.as_str()));
    assert!(!validator.validate("student/1", "1500000001", hash.as_str()));
    assert!(!validator.validate("student/2", "1500000000", hash.as_str()));
    assert!(!validator.validate("student/1", "1500000000", ""));
    assert!(!validator.validate("student/1", "1500000000", &hash.as_str()[1..]));
}

#[test]
fn codeless_rejects_bad_secret() {
    assert!(CodelessValidator::new("%%%").is_err());
}
