use feistel_des::crypto::cipher_traits::CipherAlgorithm;
use feistel_des::crypto::des::{DES, decrypt, encrypt};
use feistel_des::crypto::des_key_expansion::DesKeyExpansion;
use feistel_des::crypto::key_expansion::KeyExpansion;

fn main() {
    let key = 0x1334_5779_9BBC_DFF1u64;
    let block = 0x0123_4567_89AB_CDEFu64;

    // --------------------------------------------------------
    // 0) Key schedule demo
    // --------------------------------------------------------
    println!("=== Key schedule demo ===");
    let round_keys = DesKeyExpansion.generate_round_keys(key);
    for (round, round_key) in round_keys.iter().enumerate() {
        println!("  K{:02}: {:012x}", round + 1, round_key);
    }

    // --------------------------------------------------------
    // 1) Single-block demo
    // --------------------------------------------------------
    println!("\n=== Single-block demo ===");
    let ciphertext = encrypt(block, key);
    let decrypted = decrypt(ciphertext, key);
    println!("  Plaintext:  {:016x}", block);
    println!("  Ciphertext: {:016x}", ciphertext);
    println!("  Decrypted:  {:016x}", decrypted);
    assert_eq!(decrypted, block);

    // --------------------------------------------------------
    // 2) Avalanche demo
    // --------------------------------------------------------
    println!("\n=== Avalanche demo ===");
    for bit in [0u32, 17, 63] {
        let flipped = encrypt(block ^ (1u64 << bit), key);
        println!(
            "  flip plaintext bit {:2}: {:016x} ({} ciphertext bits changed)",
            bit,
            flipped,
            (ciphertext ^ flipped).count_ones()
        );
    }

    // --------------------------------------------------------
    // 3) Byte interface demo
    // --------------------------------------------------------
    println!("\n=== Byte interface demo ===");
    let cipher = DES::with_key(key);
    let encrypted_bytes = cipher.encrypt(&block.to_be_bytes()).unwrap();
    let decrypted_bytes = cipher.decrypt(&encrypted_bytes).unwrap();
    println!("  Plaintext bytes: {:02x?}", block.to_be_bytes());
    println!("  Encrypted bytes: {:02x?}", encrypted_bytes);
    println!("  Decrypted bytes: {:02x?}", decrypted_bytes);
    assert_eq!(decrypted_bytes, block.to_be_bytes().to_vec());
}
