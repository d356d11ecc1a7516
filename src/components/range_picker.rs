use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::dates::{today, DateRange, MonthCursor, RangePhase, WEEKDAYS_IT};
use crate::theme::{BG, MUTED, PRIMARY};

#[derive(Properties, PartialEq)]
pub struct RangePickerProps {
    pub range: DateRange,
    /// Receives the whole new range on every click.
    pub on_select: Callback<DateRange>,
    #[prop_or(2)]
    pub months: usize,
}

/// Check-in / check-out calendar. The owner holds the range; this only
/// remembers which month is on screen. Navigation stops at the current month,
/// but days already past in that month stay clickable.
#[function_component(RangePicker)]
pub fn range_picker(props: &RangePickerProps) -> Html {
    let now = today();
    let earliest = MonthCursor::containing(now);
    let first = use_state(|| earliest);

    let on_prev = {
        let first = first.clone();
        Callback::from(move |_: MouseEvent| {
            if *first > earliest {
                first.set(first.prev());
            }
        })
    };

    let on_next = {
        let first = first.clone();
        Callback::from(move |_: MouseEvent| first.set(first.next()))
    };

    let endpoint = |d: NaiveDate| match props.range.phase() {
        RangePhase::Complete(f, t) => d == f || d == t,
        RangePhase::StartOnly(f) => d == f,
        RangePhase::Empty => false,
    };

    let render_month = |cursor: MonthCursor| {
        html! {
            <div class="month" key={cursor.caption()}>
                <div class="month-caption" style={format!("color:{PRIMARY};")}>{ cursor.caption() }</div>
                <div class="month-grid">
                    { for WEEKDAYS_IT.iter().map(|w| html! { <div class="weekday">{ *w }</div> }) }
                    { for cursor.grid().into_iter().map(|cell| match cell {
                        None => html! { <div class="day blank" /> },
                        Some(d) => {
                            let range = props.range;
                            let on_select = props.on_select.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(range.select(d)));
                            let class = classes!(
                                "day",
                                (d == now).then_some("today"),
                                props.range.contains(d).then_some("in-range"),
                                endpoint(d).then_some("selected"),
                            );
                            html! {
                                <button type="button" {class} {onclick}>{ d.day().to_string() }</button>
                            }
                        }
                    }) }
                </div>
            </div>
        }
    };

    let mut months = Vec::with_capacity(props.months);
    let mut cursor = *first;
    for _ in 0..props.months {
        months.push(cursor);
        cursor = cursor.next();
    }

    html! {
        <div class="picker" style={format!("background-color:{BG};border-color:{MUTED};")}>
            <div class="picker-nav">
                <button type="button" class="nav-arrow" aria-label="Mese precedente" disabled={*first <= earliest} onclick={on_prev}>{ "‹" }</button>
                <button type="button" class="nav-arrow" aria-label="Mese successivo" onclick={on_next}>{ "›" }</button>
            </div>
            <div class="months">
                { for months.into_iter().map(render_month) }
            </div>
            <div class="range-summary" style={format!("color:{PRIMARY};")}>{ props.range.summary() }</div>
        </div>
    }
}
