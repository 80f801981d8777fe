use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "dakasa", version, about = "DaKasa account screens in your terminal")]
pub struct Cli {
    /// Identity backend scheme (http or https)
    #[arg(long, value_name = "SCHEME")]
    pub api_scheme: Option<String>,

    /// Identity backend host name
    #[arg(long, value_name = "DOMAIN")]
    pub api_domain: Option<String>,

    /// Identity backend port
    #[arg(long, value_name = "PORT")]
    pub api_port: Option<u16>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,
}
