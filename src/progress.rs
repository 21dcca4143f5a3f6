//! Profile completion estimation: a fixed required-field set mapped to an
//! integer percentage and a color band.

/// Field identifiers counted toward profile completion, in display order.
/// There is no runtime configuration; changing the required set means
/// redeploying the client.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "id_first_name",
    "id_last_name",
    "id_email",
    "id_phone_number",
    "id_street",
    "id_city",
    "id_state",
    "id_zip_code",
];

/// Color band for the completion indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Danger,
    Warning,
    Info,
    Success,
}

impl Band {
    pub fn class(self) -> &'static str {
        match self {
            Band::Danger => "bg-danger",
            Band::Warning => "bg-warning",
            Band::Info => "bg-info",
            Band::Success => "bg-success",
        }
    }
}

/// Snapshot of how complete the profile form is. Derived from scratch on
/// every observed change, never updated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub filled: usize,
    pub required: usize,
    pub percent: u8,
}

impl Completion {
    /// Count values that are non-empty after trimming and round the ratio
    /// half-up to an integer percentage.
    pub fn measure<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filled = 0;
        let mut required = 0;
        for value in values {
            required += 1;
            if !value.trim().is_empty() {
                filled += 1;
            }
        }
        let percent = if required == 0 {
            0
        } else {
            ((filled as f64 / required as f64) * 100.0).round() as u8
        };
        Self {
            filled,
            required,
            percent,
        }
    }

    /// Bands are half-open except the top, which is inclusive at 100.
    pub fn band(self) -> Band {
        match self.percent {
            0..=24 => Band::Danger,
            25..=49 => Band::Warning,
            50..=74 => Band::Info,
            _ => Band::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_out_of_eight(filled: usize) -> Completion {
        let values: Vec<&str> = (0..8).map(|i| if i < filled { "x" } else { "" }).collect();
        Completion::measure(values)
    }

    #[test]
    fn empty_form_is_zero_percent_danger() {
        let c = filled_out_of_eight(0);
        assert_eq!(c.percent, 0);
        assert_eq!(c.band(), Band::Danger);
    }

    #[test]
    fn six_of_eight_is_seventy_five_percent_success() {
        // 75 sits on the inclusive lower edge of the success band.
        let c = filled_out_of_eight(6);
        assert_eq!(c.percent, 75);
        assert_eq!(c.band(), Band::Success);
    }

    #[test]
    fn three_of_eight_rounds_half_up_to_thirty_eight() {
        let c = filled_out_of_eight(3);
        assert_eq!(c.percent, 38);
        assert_eq!(c.band(), Band::Warning);
    }

    #[test]
    fn full_form_is_one_hundred_percent() {
        let c = filled_out_of_eight(8);
        assert_eq!(c.percent, 100);
        assert_eq!(c.band(), Band::Success);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(filled_out_of_eight(1).band(), Band::Danger); // 13%
        assert_eq!(filled_out_of_eight(2).band(), Band::Warning); // 25%
        assert_eq!(filled_out_of_eight(4).band(), Band::Info); // 50%
        assert_eq!(filled_out_of_eight(5).band(), Band::Info); // 63%
    }

    #[test]
    fn whitespace_only_values_do_not_count() {
        let c = Completion::measure(["  ", "\t", "Ann", "", "", "", "", ""]);
        assert_eq!(c.filled, 1);
        assert_eq!(c.percent, 13);
    }

    #[test]
    fn required_field_set_is_fixed_and_ordered() {
        assert_eq!(REQUIRED_FIELDS.len(), 8);
        assert_eq!(REQUIRED_FIELDS[0], "id_first_name");
        assert_eq!(REQUIRED_FIELDS[7], "id_zip_code");
    }

    #[test]
    fn no_fields_means_zero_percent() {
        let c = Completion::measure([]);
        assert_eq!(c.percent, 0);
        assert_eq!(c.required, 0);
    }
}
