// Cover loading pipeline: downloads run on the tokio runtime, decoded RGBA
// comes back over an mpsc channel and is uploaded to a texture in `update`.

use eframe::egui;
use lazy_static::lazy_static;
use thiserror::Error;

use super::rt;
use crate::types::Project;

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("portfolio-showcase/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("reqwest client");
}

/// Result of one cover download, keyed by project id.
pub enum CoverMsg {
    Ok {
        project_id: String,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        project_id: String,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

async fn fetch_image(url: &str) -> Result<(usize, usize, Vec<u8>), FetchError> {
    log::debug!("fetch_image: GET {}", url);
    let resp = CLIENT
        .get(url)
        .header("Accept", "image/jpeg,image/png,image/gif,image/webp")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = resp.bytes().await?;
    let img = image::load_from_memory(&bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w as usize, h as usize, rgba.into_vec()))
}

impl super::PortfolioApp {
    /// Drain finished downloads and upload them as textures.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.images.cover_rx.try_recv() {
            match msg {
                CoverMsg::Ok {
                    project_id,
                    w,
                    h,
                    rgba,
                } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("cover_{project_id}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.images.covers_loading.remove(&project_id);
                    self.images.covers.insert(project_id, tex);
                }
                CoverMsg::Err { project_id } => {
                    self.images.covers_loading.remove(&project_id);
                    // Park the id so the broken tile does not refetch forever.
                    self.images.covers_failed.insert(project_id);
                }
            }
            ctx.request_repaint();
        }
    }

    /// Ensure a download is scheduled for every visible project exactly once.
    pub(super) fn schedule_cover_downloads(&mut self, ctx: &egui::Context) {
        let targets: Vec<(String, String)> = self
            .projects
            .iter()
            .filter(|p| !p.image.is_empty())
            .filter(|p| {
                !self.images.covers.contains_key(&p.id)
                    && !self.images.covers_loading.contains(&p.id)
                    && !self.images.covers_failed.contains(&p.id)
            })
            .map(|p| (p.id.clone(), p.image.clone()))
            .collect();

        for (id, url) in targets {
            self.images.covers_loading.insert(id.clone());
            self.spawn_cover_download(ctx, id, url);
        }
    }

    fn spawn_cover_download(&self, ctx: &egui::Context, project_id: String, url: String) {
        let tx = self.images.cover_tx.clone();
        let ctx2 = ctx.clone();
        rt().spawn(async move {
            let msg = match fetch_image(&url).await {
                Ok((w, h, rgba)) => {
                    log::info!("cover ok: id={} size={}x{}", project_id, w, h);
                    CoverMsg::Ok {
                        project_id,
                        w,
                        h,
                        rgba,
                    }
                }
                Err(err) => {
                    log::warn!("cover fetch failed: id={} url={} err={}", project_id, url, err);
                    CoverMsg::Err { project_id }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    pub(super) fn cover_for<'a>(&'a self, project: &Project) -> CoverSlot<'a> {
        if let Some(tex) = self.images.covers.get(&project.id) {
            CoverSlot::Ready(tex)
        } else if self.images.covers_failed.contains(&project.id) || project.image.is_empty() {
            CoverSlot::Broken
        } else {
            CoverSlot::Loading
        }
    }
}

/// What the card has to draw in the cover area this frame.
pub enum CoverSlot<'a> {
    Ready(&'a egui::TextureHandle),
    Loading,
    Broken,
}
