use mish::core::config::ShellConfig;
use mish::shell::Shell;

fn main() -> Result<(), mish::error::ShellError> {
    env_logger::init();

    let shell = Shell::new(ShellConfig::default())?;
    shell.run()
}
