use bookland::{IsbnError, convert_to_isbn10, convert_to_isbn13};

fn main() {
    // ── Length errors ─────────────────────────────────────────────────
    println!("=== Length ===");
    for input in ["123456789", "12345678901234"] {
        match convert_to_isbn13(input) {
            Ok(_) => println!("  converted (unexpected)"),
            Err(e) => println!("  {input}: {e}"),
        }
    }

    // ── Checksum failures ─────────────────────────────────────────────
    println!("\n=== Invalid ISBN ===");
    for input in ["7532736559", "helloworld"] {
        match convert_to_isbn13(input) {
            Ok(_) => println!("  converted (unexpected)"),
            Err(e) => println!("  {input}: {e}"),
        }
    }

    // ── 979-prefixed ISBN-13s have no ISBN-10 form ────────────────────
    println!("\n=== Unconvertible prefix ===");
    match convert_to_isbn10("9797532736553") {
        Ok(_) => println!("  converted (unexpected)"),
        Err(e @ IsbnError::UnconvertiblePrefix(_)) => println!("  {e}"),
        Err(e) => println!("  unexpected error kind: {e}"),
    }
}
