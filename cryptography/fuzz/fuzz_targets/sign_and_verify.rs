#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use secp256k1_schnorr::{Error, PrivateKey, Signer, Verifier};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub private_key: [u8; 32],
    pub digest: [u8; 32],
    pub flip: Option<u16>,
}

fn fuzz(input: FuzzInput) {
    let private_key = match PrivateKey::from_bytes(&input.private_key) {
        Ok(private_key) => private_key,
        Err(Error::InvalidPrivateKey) => return,
        Err(e) => panic!("unexpected key error: {e}"),
    };
    let public_key = private_key.public_key();
    let signature = private_key.sign(&input.digest).expect("signing failed");
    assert_eq!(signature, private_key.sign(&input.digest).unwrap());
    assert!(public_key.verify(&input.digest, &signature));

    if let Some(flip) = input.flip {
        let bit = flip as usize % 512;
        let mut raw = signature.to_bytes();
        raw[bit / 8] ^= 1 << (bit % 8);
        assert!(!public_key.verify(&input.digest, &raw.into()));
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
