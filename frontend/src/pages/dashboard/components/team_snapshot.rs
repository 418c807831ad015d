use std::rc::Rc;

use crate::{
    components::empty_state::EmptyState,
    data::User,
    pages::dashboard::snapshot::{day_squares, DaySquare, StatusSource, SNAPSHOT_ROW_LIMIT},
};
use chrono::NaiveDate;
use leptos::*;

fn square_class(square: &DaySquare) -> String {
    let today = if square.is_today {
        "relative after:content-[''] after:absolute after:w-1.5 after:h-1.5 after:bg-green-500 after:rounded-full after:top-1/2 after:left-1/2 after:-translate-x-1/2 after:-translate-y-1/2"
    } else {
        ""
    };
    format!(
        "w-4 h-4 sm:w-5 sm:h-5 flex items-center justify-center border {} rounded-[4px] text-[6px] sm:text-[7px] text-gray-500 {today}",
        square.status.border_class(),
    )
}

/// One row per colleague (first five) with a status square for every day of
/// the selected month.
#[component]
pub fn TeamSnapshot(
    colleagues: Vec<User>,
    #[prop(into)] month: Signal<u32>,
    year: i32,
    today: NaiveDate,
    source: Rc<dyn StatusSource>,
    on_select: Callback<String>,
) -> impl IntoView {
    if colleagues.is_empty() {
        return view! { <EmptyState title="No team members found." /> }.into_view();
    }
    let rows = colleagues
        .into_iter()
        .take(SNAPSHOT_ROW_LIMIT)
        .map(|colleague| {
            let source = source.clone();
            let id = colleague.id.clone();
            let squares_for = colleague.id.clone();
            let squares = move || {
                day_squares(source.as_ref(), &squares_for, year, month.get(), today)
                    .into_iter()
                    .enumerate()
                    .map(|(index, square)| {
                        let separator = (index + 1) % 7 == 0;
                        view! {
                            <div class=square_class(&square) title=square.title()>
                                {square.weekday_initial}
                            </div>
                            {separator.then(|| view! { <div class="w-px h-5 bg-gray-300 mx-1"></div> })}
                        }
                    })
                    .collect_view()
            };
            view! {
                <div
                    class="flex flex-col sm:flex-row items-start sm:items-center gap-3 sm:gap-4 py-4 hover:bg-indigo-50 px-2 sm:px-4 rounded-lg cursor-pointer"
                    data-colleague=colleague.id.clone()
                    on:click=move |_| on_select.call(id.clone())
                >
                    <div class="flex items-center gap-3 sm:w-48">
                        <div class="w-8 sm:w-10 h-8 sm:h-10 rounded-full bg-gradient-to-r from-indigo-500 to-purple-600 text-white text-xs flex items-center justify-center">
                            {colleague.initials()}
                        </div>
                        <div class="flex flex-col flex-1">
                            <span class="text-xs sm:text-sm font-semibold text-gray-800 truncate">{colleague.name.clone()}</span>
                            <span class="text-[10px] sm:text-xs text-gray-500">{colleague.role.label()}</span>
                        </div>
                    </div>
                    <div class="flex-1 w-full flex flex-wrap gap-[2px]">{squares}</div>
                </div>
            }
        })
        .collect_view();
    view! { <div class="divide-y divide-gray-200 w-full">{rows}</div> }.into_view()
}
