use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use ratatui::layout::Rect;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::{ImageBox, ImageError, ImagePreview, backend};
use crate::net::current_thread_runtime;

/// Portrait to download for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
	pub id: String,
	pub url: String,
}

/// Outcome of one request. `None` means the load failed.
#[derive(Debug)]
pub struct ImageResult {
	pub id: String,
	pub preview: Option<ImagePreview>,
}

enum ImageCommand {
	Load(ImageRequest),
	Shutdown,
}

/// Handle to the background image worker.
pub struct ImageRuntime {
	tx: UnboundedSender<ImageCommand>,
	rx: Receiver<ImageResult>,
}

impl ImageRuntime {
	/// Spawn the worker. Images are fitted into `image_box`.
	pub fn spawn(image_box: ImageBox) -> io::Result<Self> {
		let runtime = current_thread_runtime()?;
		let (command_tx, command_rx) = unbounded_channel();
		let (result_tx, result_rx) = mpsc::channel();

		thread::Builder::new()
			.name("roster-images".into())
			.spawn(move || runtime.block_on(worker_loop(command_rx, result_tx, image_box)))?;

		Ok(Self {
			tx: command_tx,
			rx: result_rx,
		})
	}

	pub fn request(&self, request: ImageRequest) {
		if self.tx.send(ImageCommand::Load(request)).is_err() {
			tracing::debug!("image worker is gone; dropping request");
		}
	}

	pub fn try_recv(&self) -> Result<ImageResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub fn shutdown(&self) {
		let _ = self.tx.send(ImageCommand::Shutdown);
	}
}

impl Drop for ImageRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

async fn worker_loop(
	mut commands: UnboundedReceiver<ImageCommand>,
	results: Sender<ImageResult>,
	image_box: ImageBox,
) {
	let client = reqwest::Client::new();
	while let Some(command) = commands.recv().await {
		match command {
			ImageCommand::Load(request) => {
				tokio::spawn(load_one(client.clone(), request, image_box, results.clone()));
			}
			ImageCommand::Shutdown => break,
		}
	}
}

async fn load_one(
	client: reqwest::Client,
	request: ImageRequest,
	image_box: ImageBox,
	results: Sender<ImageResult>,
) {
	let ImageRequest { id, url } = request;
	let preview = match load_preview(&client, &url, image_box).await {
		Ok(preview) => Some(preview),
		Err(err) => {
			tracing::debug!(%id, %url, error = %err, "portrait failed to load");
			None
		}
	};
	let _ = results.send(ImageResult { id, preview });
}

async fn load_preview(
	client: &reqwest::Client,
	url: &str,
	image_box: ImageBox,
) -> Result<ImagePreview, ImageError> {
	let response = client.get(url).send().await?;
	let status = response.status();
	if !status.is_success() {
		return Err(ImageError::Status(status));
	}
	let bytes = response.bytes().await?;

	tokio::task::spawn_blocking(move || encode(&bytes, image_box))
		.await
		.map_err(|err| ImageError::Encode(err.to_string()))?
}

fn encode(bytes: &[u8], image_box: ImageBox) -> Result<ImagePreview, ImageError> {
	let graphics = backend::backend().ok_or(ImageError::NoGraphics)?;
	let image = image::load_from_memory(bytes)?;
	let area: Rect = image_box.cells(graphics.font_size());
	ImagePreview::encode(image, graphics.picker(), area)
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn unreachable_image_settles_as_failure() {
		let runtime = ImageRuntime::spawn(ImageBox::default()).unwrap();
		runtime.request(ImageRequest {
			id: "7".into(),
			url: "http://127.0.0.1:9/portrait.png".into(),
		});

		let deadline = std::time::Instant::now() + Duration::from_secs(10);
		let result = loop {
			match runtime.try_recv() {
				Ok(result) => break result,
				Err(TryRecvError::Empty) if std::time::Instant::now() < deadline => {
					thread::sleep(Duration::from_millis(10));
				}
				Err(err) => panic!("no image result: {err}"),
			}
		};
		assert_eq!(result.id, "7");
		assert!(result.preview.is_none());
	}
}
