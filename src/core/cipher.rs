/// Caesar-rotate `input` by `shift` positions.
///
/// Each ASCII letter rotates within its own case's 26-letter alphabet,
/// wrapping at the boundary; every other character is copied unchanged.
/// Any signed magnitude is accepted: the effective rotation is
/// `shift.rem_euclid(26)`. Decoding a message encrypted with shift `k`
/// is `transform(input, -k)`; flipping the sign gives encryption.
pub fn transform(input: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;

    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                (((c as u8 - base + shift) % 26) + base) as char
            } else {
                c
            }
        })
        .collect()
}
