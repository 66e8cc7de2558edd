use super::*;

#[test]
fn fips180_vector_abc() {
    // FIPS 180-4 test vector
    let digest = Sha256::digest(b"abc").unwrap();
    let expected =
        hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad").unwrap();
    assert_eq!(digest.as_ref(), expected.as_slice());
}

#[test]
fn fips180_vector_empty() {
    let digest = Sha256::digest(b"").unwrap();
    let expected =
        hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855").unwrap();
    assert_eq!(digest.as_ref(), expected.as_slice());
}

#[test]
fn fips180_vector_two_blocks() {
    // 56-byte message forcing the padding into a second block
    let digest =
        Sha256::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap();
    let expected =
        hex::decode("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1").unwrap();
    assert_eq!(digest.as_ref(), expected.as_slice());
}

#[test]
fn streaming_matches_one_shot() {
    let mut hasher = Sha256::new();
    hasher.update(b"ab").unwrap();
    hasher.update(b"c").unwrap();
    let streamed = hasher.finalize().unwrap();

    let one_shot = Sha256::digest(b"abc").unwrap();
    assert_eq!(streamed.as_ref(), one_shot.as_ref());
}

#[test]
fn long_input_crosses_many_blocks() {
    // One million 'a' characters, the classic FIPS 180-4 stress vector
    let input = vec![b'a'; 1_000_000];
    let digest = Sha256::digest(&input).unwrap();
    let expected =
        hex::decode("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0").unwrap();
    assert_eq!(digest.as_ref(), expected.as_slice());
}

#[test]
fn trait_constants_describe_sha256() {
    assert_eq!(Sha256::output_size(), 32);
    assert_eq!(Sha256::block_size(), 64);
    assert_eq!(Sha256::name(), "SHA-256");
}
