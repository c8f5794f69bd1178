use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg, Program};
use bubbletea_wheel_timer::hms::Hms;
use bubbletea_wheel_timer::screen;

// Preselect from `wheel-timer [HH MM SS]`.
fn initial_from_args() -> Option<Hms> {
    let parts: Vec<u32> = std::env::args()
        .skip(1)
        .take(3)
        .filter_map(|a| a.parse().ok())
        .collect();
    match parts.as_slice() {
        [h, m, s] => match Hms::new(*h, *m, *s) {
            Ok(hms) => Some(hms),
            Err(err) => {
                log::warn!("ignoring initial duration: {}", err);
                None
            }
        },
        _ => None,
    }
}

struct App {
    timer: screen::Model,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut opts = Vec::new();
        if let Some(hms) = initial_from_args() {
            opts.push(screen::with_initial(hms));
        }
        (
            Self {
                timer: screen::new(&opts),
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.timer.update(msg)
    }

    fn view(&self) -> String {
        self.timer.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;

    program.run().await?;
    Ok(())
}
