//! Demonstrates the symmetric OFB transform against a NIST vector.

use aesofb_stream::stream_transform;

fn main() {
    // NIST SP 800-38A F.4.5, first block.
    let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
        .expect("valid key hex");
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").expect("valid iv hex");
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").expect("valid plaintext hex");

    let ciphertext = stream_transform(&key, &iv, &plaintext).expect("valid key and iv");
    assert_eq!(hex::encode(&ciphertext), "dc7e84bfda79164b7ecd8486985d3860");

    // The same call decrypts.
    let recovered = stream_transform(&key, &iv, &ciphertext).expect("valid key and iv");
    assert_eq!(recovered, plaintext);

    println!("example succeeded; ciphertext matches the NIST OFB vector");
}
