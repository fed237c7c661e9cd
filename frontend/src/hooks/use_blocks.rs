use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{Block, CreateBlockRequest};

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct BlocksState {
    pub blocks: Vec<Block>,
    pub loading: bool,
}

#[derive(Clone)]
pub struct UseBlocksActions {
    pub refresh: Callback<()>,
    pub create: Callback<CreateBlockRequest>,
    pub delete: Callback<i64>,
    pub delete_many: Callback<Vec<i64>>,
}

pub struct UseBlocksResult {
    pub state: BlocksState,
    pub actions: UseBlocksActions,
}

#[hook]
pub fn use_blocks(api_client: &ApiClient, on_error: Callback<String>) -> UseBlocksResult {
    let blocks = use_state(Vec::<Block>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let blocks = blocks.clone();
        let loading = loading.clone();
        let on_error = on_error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let blocks = blocks.clone();
            let loading = loading.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_blocks().await {
                    Ok(data) => blocks.set(data),
                    Err(e) => on_error.emit(e.to_string()),
                }
                loading.set(false);
            });
        })
    };

    let create = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_error = on_error.clone();

        Callback::from(move |request: CreateBlockRequest| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.create_block(&request).await {
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
                match api_client.delete_block(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    let delete_many = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();
        let on_error = on_error.clone();

        Callback::from(move |ids: Vec<i64>| {
            if ids.is_empty() {
                return;
            }
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match api_client.delete_blocks(ids).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseBlocksResult {
        state: BlocksState {
            blocks: (*blocks).clone(),
            loading: *loading,
        },
        actions: UseBlocksActions {
            refresh,
            create,
            delete,
            delete_many,
        },
    }
}
