use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Shadow Forge")
        .index_by_robots(false)
}

// The editor keeps all state in the browser; nothing is sent up.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("BACKEND PANIC: {panic_info:?}");
    }));

    start(frontend, up_msg_handler, |_| {}).await
}
