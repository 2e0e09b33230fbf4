#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use secp256k1_schnorr::{Error, PublicKey, Signature, Verifier};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub public_key: [u8; 33],
    pub digest: [u8; 32],
    pub signature: [u8; 64],
}

fn fuzz(input: FuzzInput) {
    let Ok(public_key) = PublicKey::from_bytes(&input.public_key) else {
        return;
    };
    let signature = Signature::from(input.signature);
    match public_key.check(&input.digest, &signature) {
        Ok(()) | Err(Error::MalformedSignature) | Err(Error::InvalidSignature) => {}
        Err(e) => panic!("unexpected verification error: {e}"),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
