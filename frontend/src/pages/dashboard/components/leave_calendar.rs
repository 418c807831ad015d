use crate::pages::dashboard::calendar::{weeks, CalendarCell, DayCategory, WEEKDAY_HEADERS};
use chrono::Datelike;
use leptos::*;

fn category_icon(category: DayCategory) -> Option<&'static str> {
    match category {
        DayCategory::PublicHoliday => Some("☀"),
        DayCategory::Weekend => Some("📅"),
        DayCategory::PersonalLeave => Some("☂"),
        DayCategory::Working => None,
    }
}

/// Month grid, Monday first. On narrow screens one week shows at a time.
#[component]
pub fn LeaveCalendar(cells: Vec<CalendarCell>, on_select: Callback<CalendarCell>) -> impl IntoView {
    let weeks = weeks(&cells);
    let week_count = weeks.len();
    let current_week = create_rw_signal(0usize);

    let rows = weeks
        .into_iter()
        .enumerate()
        .map(|(index, week)| {
            view! {
                <div class=move || {
                    if current_week.get() == index {
                        "grid grid-cols-7 gap-1 mb-1"
                    } else {
                        "hidden sm:grid grid-cols-7 gap-1 mb-1"
                    }
                }>
                    {week.into_iter().map(|cell| view! { <DayCell cell=cell on_select=on_select /> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="w-full rounded-xl shadow-[0_4px_12px_rgba(0,0,0,0.1)] bg-white border border-gray-200 p-4">
            <div class="flex items-center justify-between mb-4 sm:hidden">
                <button
                    class="p-1 text-gray-600 hover:text-gray-800 disabled:opacity-50"
                    aria-label="Previous week"
                    disabled=move || current_week.get() == 0
                    on:click=move |_| current_week.update(|w| *w = w.saturating_sub(1))
                >
                    "‹"
                </button>
                <span class="text-sm font-semibold text-gray-800">
                    {move || format!("Week {} of {}", current_week.get() + 1, week_count)}
                </span>
                <button
                    class="p-1 text-gray-600 hover:text-gray-800 disabled:opacity-50"
                    aria-label="Next week"
                    disabled=move || current_week.get() + 1 >= week_count
                    on:click=move |_| current_week.update(|w| *w = (*w + 1).min(week_count.saturating_sub(1)))
                >
                    "›"
                </button>
            </div>
            <div class="grid grid-cols-7 gap-1 mb-2">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|day| view! {
                        <div class="p-2 text-center text-xs font-semibold text-gray-800 bg-gradient-to-b from-indigo-50 to-white rounded-t-lg">
                            {*day}
                        </div>
                    })
                    .collect_view()}
            </div>
            {rows}
            <div class="flex flex-wrap gap-4 mt-3 text-xs text-gray-600">
                <span class="flex items-center gap-1"><span class="w-3 h-3 rounded bg-green-200"></span>"Public Holiday"</span>
                <span class="flex items-center gap-1"><span class="w-3 h-3 rounded bg-yellow-200"></span>"Weekend"</span>
                <span class="flex items-center gap-1"><span class="w-3 h-3 rounded bg-red-200"></span>"Personal Leave"</span>
            </div>
        </div>
    }
}

#[component]
fn DayCell(cell: CalendarCell, on_select: Callback<CalendarCell>) -> impl IntoView {
    match cell {
        CalendarCell::Placeholder => view! {
            <div class="p-2 aspect-square bg-gray-100 border border-gray-200 rounded-lg pointer-events-none" aria-hidden="true"></div>
        }
        .into_view(),
        CalendarCell::Day { date, category } => {
            let text_class = if category.is_leave() { "text-gray-900" } else { "text-gray-600" };
            view! {
                <div
                    class=format!(
                        "p-2 aspect-square flex flex-col items-center justify-center {} border border-gray-200 rounded-lg cursor-pointer transition-all duration-200 hover:shadow-md",
                        category.cell_class(),
                    )
                    title=category.label()
                    data-date=date.to_string()
                    on:click=move |_| on_select.call(cell)
                >
                    <span class=format!("text-xs font-medium {text_class}")>{date.day()}</span>
                    {category_icon(category).map(|icon| view! { <span class="text-[10px]" aria-hidden="true">{icon}</span> })}
                </div>
            }
            .into_view()
        }
    }
}
