use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::Block;

#[derive(Properties, PartialEq)]
pub struct BlockListProps {
    pub blocks: Vec<Block>,
    pub loading: bool,
    pub on_delete: Callback<i64>,
    pub on_delete_many: Callback<Vec<i64>>,
}

fn block_label(block: &Block) -> String {
    let date = block.date.format("%Y-%m-%d").to_string();
    if block.full_day {
        return format!("{} (whole day)", date);
    }
    match (block.start_time, block.end_time) {
        (Some(start), Some(end)) => format!("{} {} - {}", date, start, end),
        _ => date,
    }
}

/// Existing blocks with single delete and checkbox-selected bulk delete.
#[function_component(BlockList)]
pub fn block_list(props: &BlockListProps) -> Html {
    let selected = use_state(HashSet::<i64>::new);

    if props.loading {
        return html! { <div class="loading">{"Loading blocks..."}</div> };
    }
    if props.blocks.is_empty() {
        return html! { <p class="block-empty">{"No blocks declared"}</p> };
    }

    let on_delete_selected = {
        let selected = selected.clone();
        let on_delete_many = props.on_delete_many.clone();
        Callback::from(move |_: MouseEvent| {
            let ids: Vec<i64> = selected.iter().copied().collect();
            on_delete_many.emit(ids);
            selected.set(HashSet::new());
        })
    };

    html! {
        <div class="block-list">
            <ul class="block-items">
                {for props.blocks.iter().map(|block| {
                    let id = block.id;
                    let on_toggle = {
                        let selected = selected.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*selected).clone();
                            if input.checked() {
                                next.insert(id);
                            } else {
                                next.remove(&id);
                            }
                            selected.set(next);
                        })
                    };
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                    };
                    html! {
                        <li class="block-item">
                            <label>
                                <input
                                    type="checkbox"
                                    checked={selected.contains(&id)}
                                    onchange={on_toggle}
                                />
                                <span class="block-label">{block_label(block)}</span>
                            </label>
                            <button class="btn btn-link" onclick={on_delete}>{"Remove"}</button>
                        </li>
                    }
                })}
            </ul>
            {if !selected.is_empty() {
                html! {
                    <button class="btn btn-danger" onclick={on_delete_selected}>
                        {format!("Delete {} selected", selected.len())}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
