//! Payment charts.

use leptos::*;

use crate::components::{Card, Header, Toast};
use crate::services::use_services;
use crate::{PaymentChartResponse, ToastMessage};

fn now_label() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_else(|| "00:00:00".to_string())
}

#[component]
fn PaymentChart(chart: PaymentChartResponse) -> impl IntoView {
    let widths = chart.bar_widths();
    let rows = chart
        .rows
        .into_iter()
        .zip(widths)
        .map(|(row, width)| {
            view! {
                <div class="chart-row">
                    <span>{row.month}</span>
                    <div class="chart-bar" style=format!("width: {:.1}%", width)></div>
                    <span>{row.member_count}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <Card>
            <h3>{chart.options.title}</h3>
            {rows}
        </Card>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let services = store_value(use_services());
    let toast = create_rw_signal(None::<ToastMessage>);
    let (version, set_version) = create_signal(0u32);
    let (last_refreshed, set_last_refreshed) = create_signal(None::<String>);
    let (is_refreshing, set_is_refreshing) = create_signal(false);

    let charts = create_local_resource(
        move || version.get(),
        move |_| {
            let api = services.with_value(|s| s.payment.clone());
            async move { api.get_payment_charts().await }
        },
    );

    let on_refresh = move |_| {
        if is_refreshing.get_untracked() {
            return;
        }
        let api = services.with_value(|s| s.payment.clone());
        set_is_refreshing.set(true);
        spawn_local(async move {
            match api.refresh_payments().await {
                Ok(()) => {
                    log::info!("Payments refreshed");
                    set_last_refreshed.try_set(Some(now_label()));
                    set_version.try_update(|v| *v = v.wrapping_add(1));
                    toast.try_set(Some(ToastMessage::new("Payments refreshed")));
                }
                Err(e) => {
                    log::error!("Failed to refresh payments: {}", e);
                    toast.try_set(Some(ToastMessage::new(format!(
                        "Could not refresh payments. {}",
                        e
                    ))));
                }
            }
            set_is_refreshing.try_set(false);
        });
    };

    view! {
        <Header/>
        <div class="center">
            <button class="margin-r-24" disabled=is_refreshing on:click=on_refresh>
                "Refresh payments"
            </button>
            <span class="helper">
                {move || match last_refreshed.get() {
                    Some(time) => format!("Last refreshed at {}", time),
                    None => String::new(),
                }}
            </span>
        </div>
        <Transition fallback=|| view! { <p class="center-text">"Loading charts..."</p> }>
            {move || charts.get().map(|result| match result {
                Ok(list) => view! {
                    <div class="chart-list">
                        {list
                            .into_iter()
                            .map(|chart| view! { <PaymentChart chart=chart/> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
                Err(e) => {
                    log::error!("Failed to load payment charts: {}", e);
                    view! { <p class="center-text">{format!("Could not load charts. {}", e)}</p> }
                        .into_view()
                }
            })}
        </Transition>
        <Toast toast=toast/>
    }
}
