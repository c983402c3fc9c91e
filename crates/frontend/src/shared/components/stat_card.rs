use contracts::shared::crud::MetricCard;
use leptos::prelude::*;

/// One summary count above a list table.
#[component]
pub fn StatCard(card: MetricCard) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{card.label}</div>
                <div class="stat-card__value">{card.value}</div>
            </div>
        </div>
    }
}

/// Row of summary cards, recomputed whenever `cards` changes.
#[component]
pub fn StatCards(#[prop(into)] cards: Signal<Vec<MetricCard>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <StatCard card=card /> })
                    .collect_view()
            }}
        </div>
    }
}
