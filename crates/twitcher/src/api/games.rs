use std::fmt::Display;

use super::*;

/// Coerce a game id to the numeric text sent to Helix.
///
/// Surrounding whitespace is ignored and blank input reads as `0`. Decimal,
/// exponent and `0x`/`0o`/`0b` forms are accepted; integral values are
/// written without a fraction (`"33214.0"` becomes `33214`, `"1e3"` becomes
/// `1000`). Returns `None` for text that is not a finite number.
pub fn parse_game_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some("0".into());
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .ok()
            .map(|n| n.to_string());
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // -0 is sent as 0
    let value = if value == 0.0 { 0.0 } else { value };
    Some(value.to_string())
}

impl Twitcher {
    /// Look up games by id. Accepts numbers or numeric strings.
    ///
    /// Input that [`parse_game_id`] rejects returns
    /// [`NotFound::GameIdNotNumber`] without a request.
    pub async fn get_game_by_id(
        &self,
        game_id: impl Display,
    ) -> Result<Lookup<Vec<Game>>, TwitchError> {
        let raw = game_id.to_string();
        let Some(id) = parse_game_id(&raw) else {
            tracing::debug!(game_id = %raw, "Rejected non-numeric game id");
            return Ok(Lookup::NotFound(NotFound::GameIdNotNumber));
        };

        let games = self.helix_get("games", &[("id", id.as_str())]).await?;
        Ok(Lookup::from_list(games, NotFound::Game))
    }

    /// Look up games by exact name.
    pub async fn get_game_by_name(
        &self,
        game_name: &str,
    ) -> Result<Lookup<Vec<Game>>, TwitchError> {
        let games = self.helix_get("games", &[("name", game_name)]).await?;
        Ok(Lookup::from_list(games, NotFound::Game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_ids() {
        assert_eq!(parse_game_id("33214").as_deref(), Some("33214"));
        assert_eq!(parse_game_id(" 509658\n").as_deref(), Some("509658"));
    }

    #[test]
    fn integral_decimal_and_exponent_forms_drop_the_fraction() {
        assert_eq!(parse_game_id("33214.0").as_deref(), Some("33214"));
        assert_eq!(parse_game_id("1e3").as_deref(), Some("1000"));
        assert_eq!(parse_game_id("+7").as_deref(), Some("7"));
    }

    #[test]
    fn negative_and_fractional_numbers_are_still_numbers() {
        assert_eq!(parse_game_id("-5").as_deref(), Some("-5"));
        assert_eq!(parse_game_id("1.5").as_deref(), Some("1.5"));
        assert_eq!(parse_game_id("-0").as_deref(), Some("0"));
    }

    #[test]
    fn blank_reads_as_zero() {
        assert_eq!(parse_game_id("").as_deref(), Some("0"));
        assert_eq!(parse_game_id("   ").as_deref(), Some("0"));
    }

    #[test]
    fn prefixed_integer_forms() {
        assert_eq!(parse_game_id("0x1F").as_deref(), Some("31"));
        assert_eq!(parse_game_id("0o17").as_deref(), Some("15"));
        assert_eq!(parse_game_id("0b101").as_deref(), Some("5"));
        assert_eq!(parse_game_id("0xZZ"), None);
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        assert_eq!(parse_game_id("abc"), None);
        assert_eq!(parse_game_id("12abc"), None);
        assert_eq!(parse_game_id("NaN"), None);
        assert_eq!(parse_game_id("inf"), None);
        assert_eq!(parse_game_id("1e400"), None);
    }
}
