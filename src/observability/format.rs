//! Field formatting helpers.

const SI_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Drop a trailing `:port` by splitting on the last colon.
///
/// Addresses without a colon are returned unchanged. Bracketed IPv6 peers
/// (`[::1]:8080`) keep their brackets.
pub fn strip_port(addr: &str) -> &str {
    match addr.rfind(':') {
        Some(colon) => &addr[..colon],
        None => addr,
    }
}

/// Human-readable SI byte count with no space before the unit.
///
/// Values under ten are exact (`6B`); otherwise one decimal is kept below
/// ten units (`1.2kB`) and none above (`12kB`, `999B`). The unit is chosen
/// before rounding, so `999_950` renders as `1000kB`.
pub fn compact_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{bytes}B");
    }

    let mut exp = 0;
    let mut scale = 1u64;
    while exp + 1 < SI_UNITS.len() && bytes / scale >= 1000 {
        scale *= 1000;
        exp += 1;
    }

    let val = ((bytes as f64 / scale as f64) * 10.0 + 0.5).floor() / 10.0;
    if val < 10.0 {
        format!("{val:.1}{}", SI_UNITS[exp])
    } else {
        format!("{val:.0}{}", SI_UNITS[exp])
    }
}
