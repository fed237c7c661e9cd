use yew::prelude::*;

use shared::CreateAvailabilityRequest;

use crate::components::availability::block_form::BlockForm;
use crate::components::availability::block_list::BlockList;
use crate::components::availability::slot_form::SlotForm;
use crate::components::availability::slot_generator_form::SlotGeneratorForm;
use crate::components::availability::slot_list::SlotList;
use crate::components::notification::Notification;
use crate::hooks::use_availabilities::use_availabilities;
use crate::hooks::use_blocks::use_blocks;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AvailabilityPageProps {
    pub api_client: ApiClient,
}

/// Availability configuration: bulk slot generation, manual slot entry,
/// per-weekday slot lists with reordering, and time-off blocks.
#[function_component(AvailabilityPage)]
pub fn availability_page(props: &AvailabilityPageProps) -> Html {
    let toast = use_toast();
    let availabilities = use_availabilities(&props.api_client, toast.show_error.clone());
    let blocks = use_blocks(&props.api_client, toast.show_error.clone());

    let on_generated = {
        let create_many = availabilities.actions.create_many.clone();
        let show_success = toast.show_success.clone();
        Callback::from(move |batch: Vec<CreateAvailabilityRequest>| {
            let count = batch.len();
            create_many.emit(batch);
            // One unconditional notification for the whole batch; the
            // requests themselves are not awaited or aggregated
            show_success.emit(format!("Requested {} new slots", count));
        })
    };

    html! {
        <div class="page availability-page">
            <Notification toast={toast.toast.clone()} />

            <section class="availability-forms">
                <SlotGeneratorForm
                    on_generated={on_generated}
                    on_invalid={toast.show_error.clone()}
                />
                <SlotForm
                    on_create={availabilities.actions.create_one.clone()}
                    on_invalid={toast.show_error.clone()}
                />
            </section>

            <section class="availability-slots">
                <h2>{"Weekly slots"}</h2>
                <SlotList
                    state={availabilities.state.clone()}
                    on_delete={availabilities.actions.delete.clone()}
                    on_reorder={availabilities.actions.reorder.clone()}
                />
            </section>

            <section class="availability-blocks">
                <h2>{"Blocks"}</h2>
                <BlockForm
                    on_create={blocks.actions.create.clone()}
                    on_invalid={toast.show_error.clone()}
                />
                <BlockList
                    blocks={blocks.state.blocks.clone()}
                    loading={blocks.state.loading}
                    on_delete={blocks.actions.delete.clone()}
                    on_delete_many={blocks.actions.delete_many.clone()}
                />
            </section>
        </div>
    }
}
