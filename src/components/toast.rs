use dioxus::prelude::*;

const TOAST_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

impl Toaster {
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title.into(), message.into(), ToastVariant::Success);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title.into(), message.into(), ToastVariant::Error);
    }

    fn push(&self, title: String, message: String, variant: ToastVariant) {
        let mut next_id = self.next_id;
        let id = *next_id.read();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            title,
            message,
            variant,
        });

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

#[component]
fn ToastStack() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                {
                    let class = match toast.variant {
                        ToastVariant::Success => "toast success",
                        ToastVariant::Error => "toast error",
                    };
                    rsx! {
                        div { class: class, key: "{toast.id}",
                            div { class: "toast-title", "{toast.title}" }
                            div { class: "toast-message", "{toast.message}" }
                        }
                    }
                }
            }
        }
    }
}

/// Provides the toaster context and hosts the stack above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Toaster {
        toasts: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        {children}
        ToastStack {}
    }
}
