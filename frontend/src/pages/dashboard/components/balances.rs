use crate::{
    data::LeaveBalance,
    pages::dashboard::utils::{balance_bar_style, balance_caption},
};
use leptos::*;

#[component]
pub fn LeaveBalances(balances: Vec<LeaveBalance>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-4 gap-3 sm:gap-4">
            {balances
                .into_iter()
                .map(|balance| view! { <BalanceCard balance=balance /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn BalanceCard(balance: LeaveBalance) -> impl IntoView {
    view! {
        <div class="bg-white/20 backdrop-blur-[16px] rounded-xl p-2 shadow-[0_4px_12px_rgba(0,0,0,0.1)]">
            <h3 class="text-sm font-semibold text-gray-800 mb-1">
                {format!("{} Leave", balance.leave_type.label())}
            </h3>
            <p class="text-xs text-gray-600 font-medium">{balance_caption(&balance)}</p>
            <div class="mt-1 bg-gray-100 rounded-full h-2">
                <div
                    class="bg-gradient-to-r from-indigo-500 to-purple-600 h-2 rounded-full"
                    style=balance_bar_style(&balance)
                ></div>
            </div>
        </div>
    }
}
