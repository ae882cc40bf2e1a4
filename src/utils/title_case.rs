/// Capitalizes the first letter of every alphabetic run and lowercases the rest.
///
/// Mirrors the usual "title case" string transform: `"new YORK"` becomes
/// `"New York"` and `"o'brien"` becomes `"O'Brien"`.
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_is_alphabetic = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_alphabetic {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            previous_is_alphabetic = true;
        } else {
            titled.push(c);
            previous_is_alphabetic = false;
        }
    }

    titled
}
