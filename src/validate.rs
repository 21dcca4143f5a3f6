//! Single-pass form validators. Every failure is terminal for the action;
//! the member corrects the form and retries.

/// Validate the payment form fields. The first violation wins and its
/// message is shown to the member verbatim.
pub fn payment_form(
    card_number: &str,
    card_name: &str,
    expiry: &str,
    cvv: &str,
) -> Result<(), String> {
    if card_number.trim().is_empty()
        || card_name.trim().is_empty()
        || expiry.trim().is_empty()
        || cvv.trim().is_empty()
    {
        return Err("Please fill in all payment details.".to_string());
    }

    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 16-digit card number.".to_string());
    }

    if cvv.trim().len() < 3 {
        return Err("Please enter a valid CVV code.".to_string());
    }

    Ok(())
}

/// Both names are required before a child can be added to a family
/// membership.
pub fn child_name(first: &str, last: &str) -> Result<(), String> {
    if first.trim().is_empty() || last.trim().is_empty() {
        return Err("Please provide both first and last name for the child.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_accepts_a_spaced_sixteen_digit_number() {
        assert!(payment_form("4111 1111 1111 1111", "A. Member", "12/27", "123").is_ok());
    }

    #[test]
    fn payment_rejects_missing_fields_first() {
        let err = payment_form("", "A. Member", "12/27", "123").unwrap_err();
        assert_eq!(err, "Please fill in all payment details.");
        let err = payment_form("4111111111111111", "A. Member", "12/27", "").unwrap_err();
        assert_eq!(err, "Please fill in all payment details.");
    }

    #[test]
    fn payment_rejects_wrong_length_card_numbers() {
        let err = payment_form("4111 1111 1111", "A. Member", "12/27", "123").unwrap_err();
        assert_eq!(err, "Please enter a valid 16-digit card number.");
    }

    #[test]
    fn payment_rejects_non_numeric_card_numbers() {
        assert!(payment_form("4111 1111 1111 111x", "A. Member", "12/27", "123").is_err());
    }

    #[test]
    fn payment_rejects_short_cvv() {
        let err = payment_form("4111111111111111", "A. Member", "12/27", "12").unwrap_err();
        assert_eq!(err, "Please enter a valid CVV code.");
    }

    #[test]
    fn child_requires_both_names() {
        assert!(child_name("Sam", "Rivera").is_ok());
        assert!(child_name("", "Rivera").is_err());
        assert!(child_name("Sam", "  ").is_err());
    }
}
