use super::super::context::build_round_key_table;
use super::super::{Block, Context};

#[test]
fn context_encrypt_then_decrypt_round_trips() {
    let key: Block = [
        10, 4, 12, 1, 2, 3, 11, 1, 6, 1, 2, 13, 13, 2, 7, 2, 13, 1, 3, 7, 1, 12, 1, 7, 1, 4, 9,
        13, 4, 3, 9, 5,
    ];
    let plaintext: Block = [
        3, 6, 11, 3, 2, 1, 6, 15, 13, 10, 14, 14, 11, 9, 7, 5, 7, 2, 9, 15, 10, 14, 9, 2, 3, 13,
        5, 10, 4, 15, 13, 1,
    ];

    let ctx = Context::new(key);
    let ciphertext = ctx.encrypt_block(&plaintext);
    let decrypted = ctx.decrypt_block(&ciphertext);

    assert_eq!(decrypted, plaintext);
}

#[test]
fn key_schedule_is_deterministic_across_runs() {
    let key: Block = [7; 32];
    let table_a = build_round_key_table(&key);
    let table_b = build_round_key_table(&key);
    assert_eq!(table_a, table_b);
}

#[test]
fn round_key_table_holds_35_entries_each_nibble_valued() {
    let key: Block = [9; 32];
    let table = build_round_key_table(&key);
    assert_eq!(table.len(), 35);
    for round_key in table.iter() {
        for &byte in round_key.iter() {
            assert!(byte & 0xF0 == 0);
        }
    }
}

#[test]
fn different_keys_produce_different_round_key_tables() {
    let key_a: Block = [1; 32];
    let key_b: Block = [2; 32];
    assert_ne!(build_round_key_table(&key_a), build_round_key_table(&key_b));
}
