fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = mandelbrot_rows::RunGuiCommand::default();

    command.execute()
}
