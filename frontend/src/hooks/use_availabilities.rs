use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{AvailabilitySlot, CreateAvailabilityRequest, DayOfWeek};

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::reorder::move_item;

/// Delay before refetching after a fire-and-forget create burst, so most
/// of the burst has landed by the time the list reloads.
const BULK_REFRESH_DELAY_MS: u32 = 600;

#[derive(Clone, PartialEq)]
pub struct AvailabilitiesState {
    pub slots: Vec<AvailabilitySlot>,
    pub loading: bool,
}

impl AvailabilitiesState {
    /// Slots of one weekday, in display order.
    pub fn for_day(&self, day: DayOfWeek) -> Vec<AvailabilitySlot> {
        self.slots
            .iter()
            .filter(|slot| slot.day_of_week == day)
            .cloned()
            .collect()
    }
}

#[derive(Clone)]
pub struct UseAvailabilitiesActions {
    pub refresh: Callback<()>,
    /// Bulk creation from the slot generator: every request is fired in
    /// immediate succession with no await in between and no rollback.
    pub create_many: Callback<Vec<CreateAvailabilityRequest>>,
    pub create_one: Callback<CreateAvailabilityRequest>,
    pub delete: Callback<i64>,
    /// Drag outcome within one weekday group: (day, from, to).
    pub reorder: Callback<(DayOfWeek, usize, usize)>,
}

pub struct UseAvailabilitiesResult {
    pub state: AvailabilitiesState,
    pub actions: UseAvailabilitiesActions,
}

#[hook]
pub fn use_availabilities(
    api_client: &ApiClient,
    on_error: Callback<String>,
) -> UseAvailabilitiesResult {
    let slots = use_state(Vec::<AvailabilitySlot>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let slots = slots.clone();
        let loading = loading.clone();
        let on_error = on_error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let slots = slots.clone();
            let loading = loading.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_availabilities().await {
                    Ok(data) => slots.set(data),
                    Err(e) => on_error.emit(e.to_string()),
                }
                loading.set(false);
            });
        })
    };

    let create_many = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();

        Callback::from(move |batch: Vec<CreateAvailabilityRequest>| {
            for request in batch {
                let api_client = api_client.clone();
                spawn_local(async move {
                    // Outcomes are not aggregated; a failed slot surfaces
                    // as a gap on the next reload
                    if let Err(e) = api_client.create_availability(&request).await {
                        Logger::warn_with_component(
                            "availabilities",
                            &format!("slot create failed: {}", e),
                        );
                    }
                });
            }
            let refresh = refresh.clone();
            spawn_local(async move {
                TimeoutFuture::new(BULK_REFRESH_DELAY_MS).await;
                refresh.emit(());
            });
        })
    };

    let create_one = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_error = on_error.clone();

        Callback::from(move |request: CreateAvailabilityRequest| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.create_availability(&request).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_error = on_error.clone();

        Callback::from(move |id: i64| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.delete_availability(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    let reorder = {
        let api_client = api_client.clone();
        let slots = slots.clone();
        let on_error = on_error.clone();

        Callback::from(move |(day, from, to): (DayOfWeek, usize, usize)| {
            let day_slots: Vec<AvailabilitySlot> = slots
                .iter()
                .filter(|slot| slot.day_of_week == day)
                .cloned()
                .collect();
            // Same-position drops and stray indices mean nothing to persist
            let Some(new_day_order) = move_item(&day_slots, from, to) else {
                return;
            };

            let mut reordered: Vec<AvailabilitySlot> = Vec::with_capacity(slots.len());
            for weekday in DayOfWeek::ALL {
                if weekday == day {
                    reordered.extend(new_day_order.iter().cloned());
                } else {
                    reordered.extend(slots.iter().filter(|s| s.day_of_week == weekday).cloned());
                }
            }
            let ids: Vec<i64> = reordered.iter().map(|slot| slot.id).collect();

            // Optimistic: the local order stays even if the persist fails;
            // the true order comes back on the next reload
            slots.set(reordered);

            let api_client = api_client.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                if let Err(e) = api_client.reorder_availabilities(ids).await {
                    on_error.emit(e.to_string());
                }
            });
        })
    };

    // Initial load
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseAvailabilitiesResult {
        state: AvailabilitiesState {
            slots: (*slots).clone(),
            loading: *loading,
        },
        actions: UseAvailabilitiesActions {
            refresh,
            create_many,
            create_one,
            delete,
            reorder,
        },
    }
}
