use crate::shared::format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned Rupiah amount cell.
#[component]
pub fn TableCellMoney(
    value: f64,

    /// Paint non-zero values red (outstanding balances)
    #[prop(optional)]
    warn_non_zero: bool,

    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let mut style = Vec::new();
    if warn_non_zero && value > 0.0 {
        style.push("color: var(--color-error-700)");
    }
    if bold {
        style.push("font-weight: 600");
    }

    view! {
        <TableCell class="text-right">
            <span style=style.join("; ")>{format_currency(value)}</span>
        </TableCell>
    }
}
