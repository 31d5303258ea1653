use bookland::validate;

fn main() {
    let candidates = [
        "9787532736553", // valid ISBN-13
        "9787532736557", // wrong check digit
        "7532736555",    // valid ISBN-10
        "043942089X",    // check value 10 → 'X'
        "1237532736553", // bad Bookland prefix
        "978-753273655", // hyphens are not stripped
        "helloworld",    // not digits at all
    ];

    for isbn in candidates {
        println!("{isbn:>15} → {}", if validate(isbn) { "valid" } else { "invalid" });
    }
}
