use tc74::Address;

/// Parse a part variant ("a5", "A5") or a hex address ("0x4D", "4d").
pub(crate) fn address_from_str(value: &str) -> Result<Address, String> {
    let lower = value.to_ascii_lowercase();
    if let Some(variant) = lower.strip_prefix('a') {
        let index: usize = variant
            .parse()
            .map_err(|_| format!("unknown TC74 variant {value:?}"))?;
        return Address::ALL
            .get(index)
            .copied()
            .ok_or_else(|| format!("TC74 variants are a0 to a7, not {value:?}"));
    }
    let digits = lower.strip_prefix("0x").unwrap_or(&lower);
    let raw = u8::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
    Address::try_from(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn variants() {
        assert_eq!(address_from_str("a0"), Ok(Address::A0));
        assert_eq!(address_from_str("A5"), Ok(Address::A5));
        assert!(address_from_str("a8").is_err());
        assert!(address_from_str("ax").is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(address_from_str("0x4D"), Ok(Address::A5));
        assert_eq!(address_from_str("4f"), Ok(Address::A7));
        assert!(address_from_str("0x50").is_err());
        assert!(address_from_str("zz").is_err());
    }
}
