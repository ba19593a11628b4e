use varsel_core::Axis;

/// One `--select AXIS=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub axis: String,
    pub value: String,
}

/// Parse `AXIS=VALUE`. The value may be empty (clears the slot) and may
/// itself contain `=`.
pub fn parse_pick(raw: &str) -> Result<Pick, String> {
    let (axis, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=VALUE, got '{raw}'"))?;
    let axis = axis.trim();
    if axis.is_empty() {
        return Err(format!("missing axis name in '{raw}'"));
    }
    Ok(Pick {
        axis: axis.to_owned(),
        value: value.to_owned(),
    })
}

/// Resolve an axis given by api name (case-insensitive) or zero-based index.
pub fn resolve_axis(axes: &[Axis], axis: &str) -> anyhow::Result<usize> {
    if let Some(index) = axes
        .iter()
        .position(|a| a.id == axis || a.id.eq_ignore_ascii_case(axis))
    {
        return Ok(index);
    }
    match axis.parse::<usize>() {
        Ok(index) if index < axes.len() => Ok(index),
        _ => {
            let known: Vec<&str> = axes.iter().map(|a| a.id.as_str()).collect();
            anyhow::bail!("unknown axis '{axis}'; expected one of [{}]", known.join(", "))
        }
    }
}

/// Resolve the axis of a pick. A value that is not an option on that axis is
/// still applied, since it can never validate, but it is logged.
pub fn resolve_pick(axes: &[Axis], pick: &Pick) -> anyhow::Result<usize> {
    let index = resolve_axis(axes, &pick.axis)?;
    let axis = &axes[index];
    if !pick.value.is_empty() && !axis.has_option(&pick.value) {
        tracing::warn!(
            axis = %axis.id,
            value = %pick.value,
            "picked value is not an option on this axis"
        );
    }
    Ok(index)
}
