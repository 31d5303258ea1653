use bookland::{Isbn10, convert_to_isbn10, convert_to_isbn13};

fn main() {
    // ── Free functions over plain strings ─────────────────────────────
    let isbn13 = convert_to_isbn13("7532736555").unwrap();
    println!("7532736555 → {isbn13}");

    let isbn10 = convert_to_isbn10(&isbn13).unwrap();
    println!("{isbn13} → {isbn10}");

    // ── Typed values ──────────────────────────────────────────────────
    let isbn: Isbn10 = "043942089X".parse().unwrap();
    let converted = isbn.to_isbn13();
    println!("{isbn} → {converted}");

    match converted.to_isbn10() {
        Ok(back) => println!("{converted} → {back}"),
        Err(e) => println!("{converted} → error: {e}"),
    }
}
