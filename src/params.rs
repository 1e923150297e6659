//! Token parameter record consumed by the scoring engine.
//!
//! `TokenParameters` is a strongly typed, flat record. It can be built with a
//! struct literal, or decoded from JSON / TOML / a flat JSON map. Decoding
//! reads each known key with a typed getter, so an absent key, a value of the
//! wrong type or an out-of-range value is reported as an [`Error`] naming the
//! offending field instead of being silently defaulted.
//!
//! Market signals are optional and only present when the record was produced
//! from a market data snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// Sentinel for "emissions continue indefinitely".
pub const INDEFINITE_EMISSION_YEARS: u32 = 999;

/// Full input record for one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct TokenParameters {
    // Supply
    pub circulating_supply: f64,
    pub total_supply: f64,
    /// Maximum supply, `0.0` means uncapped
    pub max_supply: f64,

    // Emission
    /// Annual inflation in percent; negative means net burn
    pub inflation_rate: f64,
    pub emission_years_left: u32,

    // Distribution
    pub team_allocation: f64,
    pub vesting_years: u32,
    pub top_10_concentration: f64,

    // Utility
    pub utility_gas: bool,
    pub utility_staking: bool,
    pub utility_governance: bool,
    pub utility_collateral: bool,
    pub utility_discount: bool,

    // Governance
    pub gov_timelock: bool,
    pub gov_multisig: bool,
    pub gov_dao_active: bool,

    // Incentives
    pub incentive_lock: bool,
    pub incentive_staking: bool,
    pub incentive_burn: bool,
    pub lock_duration_months: u32,
    pub burn_rate: f64,

    /// Live market signals, when sourced from a market data provider
    #[serde(flatten)]
    pub market: Option<MarketSignals>,
}

/// Optional market-derived signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<f64>,
    /// 24h volume divided by market cap (a fraction, not a percent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_to_market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
    /// Price change over 30 days in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_30d: Option<f64>,
    /// Token identifier used for security reference lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl MarketSignals {
    /// True when no signal at all is present
    pub fn is_empty(&self) -> bool {
        self.volume_24h.is_none()
            && self.market_cap_usd.is_none()
            && self.volume_to_market_cap.is_none()
            && self.market_cap_rank.is_none()
            && self.price_change_30d.is_none()
            && self.identifier.is_none()
    }

    /// 24h turnover as a percent of market cap.
    ///
    /// Uses the explicit ratio when supplied, otherwise derives it from
    /// volume and market cap. Returns `None` when the market cap is zero or
    /// either input is missing.
    pub fn turnover_percent(&self) -> Option<f64> {
        if let Some(ratio) = self.volume_to_market_cap {
            return Some(ratio * 100.0);
        }
        match (self.volume_24h, self.market_cap_usd) {
            (Some(volume), Some(cap)) if cap > 0.0 => Some(volume / cap * 100.0),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(volume) = self.volume_24h {
            non_negative("volume_24h", volume)?;
        }
        if let Some(cap) = self.market_cap_usd {
            non_negative("market_cap_usd", cap)?;
        }
        if let Some(ratio) = self.volume_to_market_cap {
            non_negative("volume_to_market_cap", ratio)?;
        }
        if self.market_cap_rank == Some(0) {
            return Err(Error::invalid("market_cap_rank", "rank starts at 1"));
        }
        if let Some(change) = self.price_change_30d {
            finite("price_change_30d", change)?;
            if change < -100.0 {
                return Err(Error::invalid(
                    "price_change_30d",
                    format!("cannot fall below -100%, got {}", change),
                ));
            }
        }
        Ok(())
    }
}

impl TokenParameters {
    /// Decode from a JSON document with flat keys.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(contents)?;
        Self::from_map(&map)
    }

    /// Decode from a TOML document with flat keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)?;
        let map = table
            .into_iter()
            .map(|(key, value)| (key, toml_to_json(value)))
            .collect();
        Self::from_map(&map)
    }

    /// Decode from a flat object. Every other decoder ends up here.
    ///
    /// Counts accept whole-valued floats such as `3.0`; `3.5` is rejected.
    /// A `null` value is treated as an absent key.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let fields = Fields { map };
        let params = TokenParameters {
            circulating_supply: fields.number("circulating_supply")?,
            total_supply: fields.number("total_supply")?,
            max_supply: fields.number("max_supply")?,
            inflation_rate: fields.number("inflation_rate")?,
            emission_years_left: fields.count("emission_years_left")?,
            team_allocation: fields.number("team_allocation")?,
            vesting_years: fields.count("vesting_years")?,
            top_10_concentration: fields.number("top_10_concentration")?,
            utility_gas: fields.flag("utility_gas")?,
            utility_staking: fields.flag("utility_staking")?,
            utility_governance: fields.flag("utility_governance")?,
            utility_collateral: fields.flag("utility_collateral")?,
            utility_discount: fields.flag("utility_discount")?,
            gov_timelock: fields.flag("gov_timelock")?,
            gov_multisig: fields.flag("gov_multisig")?,
            gov_dao_active: fields.flag("gov_dao_active")?,
            incentive_lock: fields.flag("incentive_lock")?,
            incentive_staking: fields.flag("incentive_staking")?,
            incentive_burn: fields.flag("incentive_burn")?,
            lock_duration_months: fields.count("lock_duration_months")?,
            burn_rate: fields.number("burn_rate")?,
            market: fields.market_signals()?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every range constraint, reporting the first offending field.
    pub fn validate(&self) -> Result<()> {
        non_negative("circulating_supply", self.circulating_supply)?;
        non_negative("total_supply", self.total_supply)?;
        non_negative("max_supply", self.max_supply)?;

        finite("inflation_rate", self.inflation_rate)?;
        if self.inflation_rate < -100.0 {
            return Err(Error::invalid(
                "inflation_rate",
                format!("cannot fall below -100%, got {}", self.inflation_rate),
            ));
        }

        percent("team_allocation", self.team_allocation)?;
        percent("top_10_concentration", self.top_10_concentration)?;
        non_negative("burn_rate", self.burn_rate)?;

        if let Some(market) = &self.market {
            market.validate()?;
        }
        Ok(())
    }

    /// Number of utility flags that are set
    pub fn active_utilities(&self) -> usize {
        [
            self.utility_gas,
            self.utility_staking,
            self.utility_governance,
            self.utility_collateral,
            self.utility_discount,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }

    /// Market signals, if any were supplied
    pub fn market(&self) -> Option<&MarketSignals> {
        self.market.as_ref().filter(|m| !m.is_empty())
    }
}

// Pure function: value must be a finite number
fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be finite, got {}", value)))
    }
}

// Pure function: value must be finite and >= 0
fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        Err(Error::invalid(
            field,
            format!("must not be negative, got {}", value),
        ))
    } else {
        Ok(())
    }
}

// Pure function: value must be a percentage in [0, 100]
fn percent(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid(
            field,
            format!("must be between 0 and 100, got {}", value),
        ))
    }
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::missing(field))
}

fn mismatch(field: &'static str, expected: &str, value: &Value) -> Error {
    Error::invalid(field, format!("expected {}, got {}", expected, value))
}

/// Typed reads from a flat parameter object, naming the key on failure.
struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn get(&self, field: &'static str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn optional_number(&self, field: &'static str) -> Result<Option<f64>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| mismatch(field, "a number", value)),
        }
    }

    fn number(&self, field: &'static str) -> Result<f64> {
        require(field, self.optional_number(field)?)
    }

    fn flag(&self, field: &'static str) -> Result<bool> {
        let value = self.get(field).ok_or_else(|| Error::missing(field))?;
        value
            .as_bool()
            .ok_or_else(|| mismatch(field, "true or false", value))
    }

    fn optional_count(&self, field: &'static str) -> Result<Option<u32>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let Value::Number(number) = value else {
            return Err(mismatch(field, "a whole number", value));
        };

        let whole = number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        });
        let whole = whole.ok_or_else(|| mismatch(field, "a whole number", value))?;
        u32::try_from(whole).map(Some).map_err(|_| {
            Error::invalid(
                field,
                format!("must be a non-negative whole number, got {}", whole),
            )
        })
    }

    fn count(&self, field: &'static str) -> Result<u32> {
        require(field, self.optional_count(field)?)
    }

    fn optional_text(&self, field: &'static str) -> Result<Option<String>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|text| Some(text.to_string()))
                .ok_or_else(|| mismatch(field, "a string", value)),
        }
    }

    fn market_signals(&self) -> Result<Option<MarketSignals>> {
        let signals = MarketSignals {
            volume_24h: self.optional_number("volume_24h")?,
            market_cap_usd: self.optional_number("market_cap_usd")?,
            volume_to_market_cap: self.optional_number("volume_to_market_cap")?,
            market_cap_rank: self.optional_count("market_cap_rank")?,
            price_change_30d: self.optional_number("price_change_30d")?,
            identifier: self.optional_text("identifier")?,
        };
        Ok(if signals.is_empty() { None } else { Some(signals) })
    }
}

// TOML values carry no type JSON cannot express, except datetimes and
// non-finite floats, which are kept as text so the typed reads reject them.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(number.to_string())),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

impl TryFrom<Map<String, Value>> for TokenParameters {
    type Error = Error;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        Self::from_map(&map)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use indoc::indoc;

    /// Reference parameter set used across unit tests
    pub(crate) fn reference_params() -> TokenParameters {
        TokenParameters {
            circulating_supply: 500_000_000.0,
            total_supply: 1_000_000_000.0,
            max_supply: 1_000_000_000.0,
            inflation_rate: 5.0,
            emission_years_left: 5,
            team_allocation: 15.0,
            vesting_years: 3,
            top_10_concentration: 30.0,
            utility_gas: false,
            utility_staking: true,
            utility_governance: true,
            utility_collateral: false,
            utility_discount: false,
            gov_timelock: true,
            gov_multisig: true,
            gov_dao_active: true,
            incentive_lock: false,
            incentive_staking: true,
            incentive_burn: false,
            lock_duration_months: 0,
            burn_rate: 0.0,
            market: None,
        }
    }

    const REFERENCE_JSON: &str = r#"{
        "circulating_supply": 500000000,
        "total_supply": 1000000000,
        "max_supply": 1000000000,
        "inflation_rate": 5.0,
        "emission_years_left": 5,
        "team_allocation": 15.0,
        "vesting_years": 3,
        "top_10_concentration": 30.0,
        "utility_gas": false,
        "utility_staking": true,
        "utility_governance": true,
        "utility_collateral": false,
        "utility_discount": false,
        "gov_timelock": true,
        "gov_multisig": true,
        "gov_dao_active": true,
        "incentive_lock": false,
        "incentive_staking": true,
        "incentive_burn": false,
        "lock_duration_months": 0,
        "burn_rate": 0.0
    }"#;

    #[test]
    fn test_decode_json_matches_literal() {
        let params = TokenParameters::from_json_str(REFERENCE_JSON).unwrap();
        assert_eq!(params, reference_params());
        assert!(params.market().is_none());
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let json = REFERENCE_JSON.replace("\"burn_rate\": 0.0", "\"unused\": 0.0");
        let err = TokenParameters::from_json_str(&json).unwrap_err();
        assert_eq!(err.field(), Some("burn_rate"));
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn test_negative_supply_is_rejected() {
        let json = REFERENCE_JSON.replace(
            "\"circulating_supply\": 500000000",
            "\"circulating_supply\": -5",
        );
        let err = TokenParameters::from_json_str(&json).unwrap_err();
        assert_eq!(err.field(), Some("circulating_supply"));
    }

    #[test]
    fn test_negative_integer_is_invalid_not_decode_error() {
        let json = REFERENCE_JSON.replace("\"vesting_years\": 3", "\"vesting_years\": -1");
        let err = TokenParameters::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                field: "vesting_years",
                ..
            }
        ));
    }

    #[test]
    fn test_string_for_flag_names_the_field() {
        let json = REFERENCE_JSON.replace("\"utility_gas\": false", "\"utility_gas\": \"no\"");
        let err = TokenParameters::from_json_str(&json).unwrap_err();
        assert_eq!(err.field(), Some("utility_gas"));
        assert!(err.to_string().contains("expected true or false"));
    }

    #[test]
    fn test_whole_float_is_accepted_as_count() {
        let json = REFERENCE_JSON.replace("\"vesting_years\": 3", "\"vesting_years\": 3.0");
        let params = TokenParameters::from_json_str(&json).unwrap();
        assert_eq!(params.vesting_years, 3);
    }

    #[test]
    fn test_fractional_count_names_the_field() {
        let json = REFERENCE_JSON.replace("\"vesting_years\": 3", "\"vesting_years\": 3.5");
        let err = TokenParameters::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                field: "vesting_years",
                ..
            }
        ));
    }

    #[test]
    fn test_toml_type_mismatch_names_the_field() {
        let toml = indoc! {r#"
            circulating_supply = "lots"
        "#};
        let err = TokenParameters::from_toml_str(toml).unwrap_err();
        assert_eq!(err.field(), Some("circulating_supply"));
    }

    #[test]
    fn test_from_map_treats_null_as_missing() {
        let mut map: Map<String, Value> = serde_json::from_str(REFERENCE_JSON).unwrap();
        assert_eq!(TokenParameters::from_map(&map).unwrap(), reference_params());

        map.insert("team_allocation".to_string(), Value::Null);
        let err = TokenParameters::from_map(&map).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "team_allocation"
            }
        ));
    }

    #[test]
    fn test_market_rank_type_mismatch_names_the_field() {
        let mut map: Map<String, Value> = serde_json::from_str(REFERENCE_JSON).unwrap();
        map.insert("market_cap_rank".to_string(), Value::from("first"));
        let err = TokenParameters::from_map(&map).unwrap_err();
        assert_eq!(err.field(), Some("market_cap_rank"));
    }

    #[test]
    fn test_percent_out_of_range_is_rejected() {
        let mut params = reference_params();
        params.top_10_concentration = 101.0;
        let err = params.validate().unwrap_err();
        assert_eq!(err.field(), Some("top_10_concentration"));
    }

    #[test]
    fn test_nan_inflation_is_rejected() {
        let mut params = reference_params();
        params.inflation_rate = f64::NAN;
        assert_eq!(params.validate().unwrap_err().field(), Some("inflation_rate"));
    }

    #[test]
    fn test_negative_inflation_is_accepted() {
        let mut params = reference_params();
        params.inflation_rate = -2.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_decode_toml_with_market_signals() {
        let toml = indoc! {r#"
            circulating_supply = 120000000
            total_supply = 120000000
            max_supply = 0
            inflation_rate = 0.5
            emission_years_left = 999
            team_allocation = 0.0
            vesting_years = 0
            top_10_concentration = 25.0
            utility_gas = true
            utility_staking = true
            utility_governance = true
            utility_collateral = true
            utility_discount = false
            gov_timelock = true
            gov_multisig = true
            gov_dao_active = true
            incentive_lock = false
            incentive_staking = true
            incentive_burn = true
            lock_duration_months = 0
            burn_rate = 0.3
            volume_24h = 15000000000.0
            market_cap_usd = 400000000000.0
            market_cap_rank = 2
            identifier = "ethereum"
        "#};

        let params = TokenParameters::from_toml_str(toml).unwrap();
        assert_eq!(params.emission_years_left, INDEFINITE_EMISSION_YEARS);
        let market = params.market().unwrap();
        assert_eq!(market.market_cap_rank, Some(2));
        assert_eq!(market.identifier.as_deref(), Some("ethereum"));
        let turnover = market.turnover_percent().unwrap();
        assert!((turnover - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_rank_zero_is_rejected() {
        let mut params = reference_params();
        params.market = Some(MarketSignals {
            market_cap_rank: Some(0),
            ..Default::default()
        });
        assert_eq!(params.validate().unwrap_err().field(), Some("market_cap_rank"));
    }

    #[test]
    fn test_turnover_skips_zero_market_cap() {
        let market = MarketSignals {
            volume_24h: Some(1_000.0),
            market_cap_usd: Some(0.0),
            ..Default::default()
        };
        assert_eq!(market.turnover_percent(), None);
    }

    #[test]
    fn test_serialize_flattens_market() {
        let mut params = reference_params();
        params.market = Some(MarketSignals {
            market_cap_rank: Some(42),
            ..Default::default()
        });
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["market_cap_rank"], 42);
        let back: TokenParameters = serde_json::from_value(value).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_active_utilities_counts_flags() {
        let params = reference_params();
        assert_eq!(params.active_utilities(), 2);
    }
}
