//! Asset fetch: each mesh is loaded on its own task and reports back to the
//! shared composer, which decides when the scene is ready.

use crate::constants::{SUBJECT_MESH_URL, TARGET_MESH_URL};
use anamorph_core::{parse_obj_vertices, Asset, MeshError, Readiness, SceneComposer};
use glam::Vec3;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_val
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("{} returned HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_mesh(url: &str) -> Result<Vec<Vec3>, MeshError> {
    let bytes = fetch_bytes(url)
        .await
        .map_err(|e| MeshError::Fetch(e.to_string()))?;
    parse_obj_vertices(&bytes)
}

#[inline]
fn mesh_url(asset: Asset) -> &'static str {
    match asset {
        Asset::Subject => SUBJECT_MESH_URL,
        Asset::Target => TARGET_MESH_URL,
    }
}

/// Start one independent load per asset. `on_ready` runs once, after whichever
/// load finishes last (failures included).
pub fn spawn_asset_loads(
    composer: Rc<RefCell<SceneComposer>>,
    rng: Rc<RefCell<StdRng>>,
    on_ready: Rc<dyn Fn()>,
) {
    for asset in Asset::ALL {
        let url = mesh_url(asset);
        let composer = composer.clone();
        let rng = rng.clone();
        let on_ready = on_ready.clone();
        spawn_local(async move {
            let loaded = load_mesh(url).await;
            match &loaded {
                Ok(v) => log::info!("[load] {} ({}): {} vertices", asset.name(), url, v.len()),
                Err(e) => log::error!("[load] {} ({}): {}", asset.name(), url, e),
            }
            let readiness = composer
                .borrow_mut()
                .complete(asset, loaded, &mut *rng.borrow_mut());
            if readiness == Readiness::BecameReady {
                on_ready();
            }
        });
    }
}
