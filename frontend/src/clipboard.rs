//! Copy-code button domain.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select_biased};
use shared::CopyStatus;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use zoon::*;

#[derive(Clone)]
pub struct CopyCode {
    pub status: Actor<CopyStatus>,
    pub copy_button_pressed_relay: Relay,
}

impl CopyCode {
    /// `code_text` is the code panel text; the latest value is cached inside
    /// the Actor and written to the clipboard on each press.
    pub fn new(
        code_text: impl Signal<Item = String> + Unpin + Send + 'static,
        confirmation_ms: u32,
    ) -> Self {
        Self::with_writer(code_text, confirmation_ms, write_clipboard_text)
    }

    /// Same as [`CopyCode::new`] with a custom clipboard writer.
    pub fn with_writer<W, Fut>(
        code_text: impl Signal<Item = String> + Unpin + Send + 'static,
        confirmation_ms: u32,
        write: W,
    ) -> Self
    where
        W: Fn(String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let (copy_button_pressed_relay, mut copy_button_pressed_stream) = relay();
        let (copy_finished_relay, mut copy_finished_stream) = relay::<bool>();
        let (confirmation_elapsed_relay, mut confirmation_elapsed_stream) = relay();
        let mut code_text_stream = code_text.to_stream().fuse();

        let status = Actor::new(CopyStatus::Idle, async move |state| {
            let mut cached_code_text = String::new();
            loop {
                // A code text update queued before a press is cached first.
                select_biased! {
                    code_text = code_text_stream.next() => {
                        if let Some(code_text) = code_text {
                            cached_code_text = code_text;
                        }
                    }
                    pressed = copy_button_pressed_stream.next() => {
                        if let Some(()) = pressed {
                            let write_finished = write(cached_code_text.clone());
                            let copy_finished_relay = copy_finished_relay.clone();
                            spawn_local(async move {
                                let succeeded = match write_finished.await {
                                    Ok(()) => true,
                                    Err(error) => {
                                        zoon::eprintln!("📋 CLIPBOARD: {error}");
                                        false
                                    }
                                };
                                copy_finished_relay.send(succeeded);
                            });
                        }
                    }
                    finished = copy_finished_stream.next() => {
                        if let Some(succeeded) = finished {
                            state.set_neq(state.get().after_copy(succeeded));
                            if succeeded {
                                let confirmation_elapsed_relay = confirmation_elapsed_relay.clone();
                                spawn_local(async move {
                                    gloo_timers::future::TimeoutFuture::new(confirmation_ms).await;
                                    confirmation_elapsed_relay.send(());
                                });
                            }
                        }
                    }
                    elapsed = confirmation_elapsed_stream.next() => {
                        if let Some(()) = elapsed {
                            state.set_neq(state.get().after_confirmation_elapsed());
                        }
                    }
                }
            }
        });

        Self {
            status,
            copy_button_pressed_relay,
        }
    }
}

async fn write_clipboard_text(text: String) -> Result<(), String> {
    let window = web_sys::window().ok_or("no browser window")?;
    let navigator = window.navigator();

    #[cfg(web_sys_unstable_apis)]
    {
        wasm_bindgen_futures::JsFuture::from(navigator.clipboard().write_text(&text))
            .await
            .map(|_| ())
            .map_err(|error| format!("{error:?}"))
    }

    #[cfg(not(web_sys_unstable_apis))]
    {
        let _ = (navigator, text);
        Err("Clipboard API requires the web_sys_unstable_apis cfg".to_string())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wasm_bindgen_test::wasm_bindgen_test;

    type Written = Arc<Mutex<Vec<String>>>;

    fn recording_writer(
        written: &Written,
        result: Result<(), String>,
    ) -> impl Fn(String) -> futures::future::Ready<Result<(), String>> + Send + 'static {
        let written = written.clone();
        move |text| {
            written.lock().unwrap().push(text);
            futures::future::ready(result.clone())
        }
    }

    async fn wait_ms(ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    async fn status(copy_code: &CopyCode) -> Option<CopyStatus> {
        copy_code.status.signal().to_stream().next().await
    }

    #[wasm_bindgen_test]
    async fn copy_writes_latest_code_text_and_reverts_label() {
        let written = Written::default();
        let code_text = Mutable::new("2px 2px 2px 0px #000000".to_string());
        let copy_code =
            CopyCode::with_writer(code_text.signal_cloned(), 50, recording_writer(&written, Ok(())));

        code_text.set("4px 4px 2px 0px #000000 inset".to_string());
        copy_code.copy_button_pressed_relay.send(());
        wait_ms(10).await;

        assert_eq!(
            *written.lock().unwrap(),
            vec!["4px 4px 2px 0px #000000 inset".to_string()]
        );
        assert_eq!(status(&copy_code).await, Some(CopyStatus::Copied));

        wait_ms(80).await;
        assert_eq!(status(&copy_code).await, Some(CopyStatus::Idle));
    }

    #[wasm_bindgen_test]
    async fn failed_copy_keeps_idle_label() {
        let written = Written::default();
        let code_text = Mutable::new("0px 0px 0px 0px #000000".to_string());
        let copy_code = CopyCode::with_writer(
            code_text.signal_cloned(),
            50,
            recording_writer(&written, Err("permission denied".to_string())),
        );

        copy_code.copy_button_pressed_relay.send(());
        wait_ms(10).await;

        assert_eq!(written.lock().unwrap().len(), 1);
        assert_eq!(status(&copy_code).await, Some(CopyStatus::Idle));
    }
}
