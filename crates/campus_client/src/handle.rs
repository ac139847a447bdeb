use std::sync::{mpsc, Arc};
use std::thread;

use campus_core::{Effect, Msg};
use campus_logging::{campus_info, campus_warn};

use crate::{PortalApi, Session};

/// Executes core effects on a background Tokio runtime and reports results
/// as messages for the update loop.
///
/// Effects run as independent tasks with no cancellation: a fetch
/// superseded by a newer one (say, the search changed while a catalog fetch
/// was in flight) still completes and may land after fresher data. Callers
/// wanting stronger guarantees should re-dispatch once the last response
/// has arrived.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<Command>,
    msg_rx: mpsc::Receiver<Msg>,
}

struct Command {
    session: Session,
    effect: Effect,
}

impl ClientHandle {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (msg_tx, msg_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    campus_warn!("client runtime unavailable: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let msg_tx = msg_tx.clone();
                runtime.spawn(async move {
                    let Command { session, effect } = command;
                    let msg = run_effect(api.as_ref(), &session, effect).await;
                    let _ = msg_tx.send(msg);
                });
            }
        });

        Self { cmd_tx, msg_rx }
    }

    /// Queues effects for execution under the given session.
    pub fn dispatch(&self, session: &Session, effects: Vec<Effect>) {
        for effect in effects {
            campus_info!("dispatch {}", effect_label(&effect));
            let _ = self.cmd_tx.send(Command {
                session: session.clone(),
                effect,
            });
        }
    }

    /// Drains one completion message, if any has arrived.
    pub fn try_recv(&self) -> Option<Msg> {
        self.msg_rx.try_recv().ok()
    }
}

async fn run_effect(api: &dyn PortalApi, session: &Session, effect: Effect) -> Msg {
    match effect {
        Effect::FetchCatalog => match api.list_courses(session).await {
            Ok(courses) => Msg::CatalogLoaded(courses),
            Err(err) => {
                campus_warn!("catalog fetch failed: {err}");
                Msg::CatalogLoadFailed(err.user_message())
            }
        },
        Effect::FetchPending => match api.list_pending(session).await {
            Ok(courses) => Msg::PendingLoaded(courses),
            Err(err) => {
                campus_warn!("pending fetch failed: {err}");
                Msg::PendingLoadFailed(err.user_message())
            }
        },
        Effect::FetchProfile => match api.fetch_profile(session).await {
            Ok(user) => Msg::ProfileLoaded(user),
            Err(err) => {
                campus_warn!("profile fetch failed: {err}");
                Msg::ProfileLoadFailed(err.user_message())
            }
        },
        Effect::CreateCourse(draft) => {
            let course_id = draft.id.clone();
            let outcome = match api.create_course(session, &draft).await {
                Ok(_) => Ok(()),
                Err(err) => {
                    campus_warn!("create {course_id} failed: {err}");
                    Err(err.user_message())
                }
            };
            Msg::CreateFinished { course_id, outcome }
        }
        Effect::ActivateCourse { course_id } => {
            let outcome = match api.activate_course(session, &course_id).await {
                Ok(()) => Ok(()),
                Err(err) => {
                    campus_warn!("activate {course_id} failed: {err}");
                    Err(err.user_message())
                }
            };
            Msg::ActivateFinished { course_id, outcome }
        }
        Effect::Subscribe { course_id } => {
            let outcome = match api.subscribe(session, &course_id).await {
                Ok(()) => Ok(()),
                Err(err) => {
                    campus_warn!("subscribe {course_id} failed: {err}");
                    Err(err.user_message())
                }
            };
            Msg::SubscribeFinished { course_id, outcome }
        }
        Effect::UploadResource { course_id, upload } => {
            let outcome = match api.add_resource(session, &course_id, &upload).await {
                Ok(_) => Ok(()),
                Err(err) => {
                    campus_warn!("upload to {course_id} failed: {err}");
                    Err(err.user_message())
                }
            };
            Msg::UploadFinished { course_id, outcome }
        }
    }
}

fn effect_label(effect: &Effect) -> &'static str {
    match effect {
        Effect::FetchCatalog => "fetch-catalog",
        Effect::FetchPending => "fetch-pending",
        Effect::FetchProfile => "fetch-profile",
        Effect::CreateCourse(_) => "create-course",
        Effect::ActivateCourse { .. } => "activate-course",
        Effect::Subscribe { .. } => "subscribe",
        Effect::UploadResource { .. } => "upload-resource",
    }
}
