//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [search] section
    if let Some(section) = ini.section(Some("search")) {
        if let Some(v) = section.get("std_distance_m") {
            config.search.std_distance_m = parse_positive("search", "std_distance_m", v)?;
        }
        if let Some(v) = section.get("snap_distance_m") {
            config.search.snap_distance_m = parse_non_negative("search", "snap_distance_m", v)?;
        }
    }

    // [network] section
    if let Some(section) = ini.section(Some("network")) {
        let network = &mut config.network;
        for (key, target) in [
            ("max_combine_distance_m", &mut network.max_combine_distance_m),
            ("max_edge_length_m", &mut network.max_edge_length_m),
            ("max_segment_turn_deg", &mut network.max_segment_turn_deg),
            ("join_max_distance_m", &mut network.join_max_distance_m),
            ("join_angle_tolerance_deg", &mut network.join_angle_tolerance_deg),
            ("join_angle_tolerance_ext_deg", &mut network.join_angle_tolerance_ext_deg),
            ("angle_ext_distance_m", &mut network.angle_ext_distance_m),
        ] {
            if let Some(v) = section.get(key) {
                *target = parse_positive("network", key, v)?;
            }
        }
        if let Some(v) = section.get("touchdown_fraction") {
            let fraction = parse_non_negative("network", "touchdown_fraction", v)?;
            if fraction >= 0.5 {
                return Err(invalid(
                    "network",
                    "touchdown_fraction",
                    v,
                    "must be below 0.5 (applied at both runway ends)",
                ));
            }
            network.touchdown_fraction = fraction;
        }
    }

    // [snap] section
    if let Some(section) = ini.section(Some("snap")) {
        let snap = &mut config.snap;
        for (key, target) in [
            ("angle_tolerance_deg", &mut snap.angle_tolerance_deg),
            ("angle_tolerance_ext_deg", &mut snap.angle_tolerance_ext_deg),
            ("taxi_speed_factor", &mut snap.taxi_speed_factor),
        ] {
            if let Some(v) = section.get(key) {
                *target = parse_positive("snap", key, v)?;
            }
        }
        if let Some(v) = section.get("similar_ts_interval_s") {
            snap.similar_ts_interval_s = parse_non_negative("snap", "similar_ts_interval_s", v)?;
        }
    }

    // [runway] section
    if let Some(section) = ini.section(Some("runway")) {
        let runway = &mut config.runway;
        for (key, target) in [
            ("max_heading_diff_deg", &mut runway.max_heading_diff_deg),
            ("max_vsi_factor", &mut runway.max_vsi_factor),
            ("approach_speed_factor", &mut runway.approach_speed_factor),
        ] {
            if let Some(v) = section.get(key) {
                *target = parse_positive("runway", key, v)?;
            }
        }
        if runway.max_vsi_factor < 1.0 {
            return Err(invalid(
                "runway",
                "max_vsi_factor",
                &runway.max_vsi_factor.to_string(),
                "must be at least 1.0",
            ));
        }
    }

    // [xplane] section
    if let Some(section) = ini.section(Some("xplane")) {
        if let Some(v) = section.get("root") {
            let v = v.trim();
            if !v.is_empty() {
                config.xplane.root = Some(expand_tilde(v));
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    // [debug] section
    if let Some(section) = ini.section(Some("debug")) {
        if let Some(v) = section.get("log_snapping") {
            config.debug.log_snapping = parse_bool(v);
        }
        if let Some(v) = section.get("dump_directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.debug.dump_directory = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a finite number greater than zero.
fn parse_positive(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(invalid(section, key, value, "must be a positive number")),
    }
}

/// Parse a finite number, zero allowed.
fn parse_non_negative(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(invalid(section, key, value, "must be zero or a positive number")),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(text).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse(
            r#"
[search]
snap_distance_m = 12.5

[network]
join_max_distance_m = 25
touchdown_fraction = 0.15

[debug]
log_snapping = yes
dump_directory = /tmp/taxinet
"#,
        )
        .unwrap();

        assert_eq!(config.search.snap_distance_m, 12.5);
        assert_eq!(config.search.std_distance_m, DEFAULT_STD_DISTANCE_M);
        assert_eq!(config.network.join_max_distance_m, 25.0);
        assert_eq!(config.network.touchdown_fraction, 0.15);
        assert_eq!(
            config.network.max_edge_length_m,
            DEFAULT_MAX_EDGE_LENGTH_M
        );
        assert!(config.debug.log_snapping);
        assert_eq!(
            config.debug.dump_directory,
            Some(PathBuf::from("/tmp/taxinet"))
        );
    }

    #[test]
    fn test_snap_distance_zero_disables() {
        let config = parse("[search]\nsnap_distance_m = 0\n").unwrap();
        assert_eq!(config.search.snap_distance_m, 0.0);
    }

    #[test]
    fn test_invalid_number() {
        let err = parse("[network]\nmax_edge_length_m = long\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, .. } => {
                assert_eq!(section, "network");
                assert_eq!(key, "max_edge_length_m");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_and_out_of_range_values() {
        assert!(parse("[search]\nstd_distance_m = -5\n").is_err());
        assert!(parse("[search]\nstd_distance_m = 0\n").is_err());
        assert!(parse("[network]\ntouchdown_fraction = 0.5\n").is_err());
        assert!(parse("[runway]\nmax_vsi_factor = 0.8\n").is_err());
    }

    #[test]
    fn test_parse_bool_values() {
        for v in ["true", "TRUE", "1", "yes", "on", " On "] {
            assert!(parse_bool(v), "{}", v);
        }
        for v in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(v), "{}", v);
        }
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/X-Plane 12");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("X-Plane 12"));
        }
        assert_eq!(expand_tilde("/opt/xp"), PathBuf::from("/opt/xp"));
    }
}
