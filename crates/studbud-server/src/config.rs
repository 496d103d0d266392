use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::Parser;
use studbud_service::{GenerationConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "studbud-server", about = "Studbud study planner: web form")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "STUDBUD_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "STUDBUD_PORT", default_value = "8501")]
    pub port: u16,

    /// API key for the Google Generative Language API
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for every plan, e.g. "gemini-2.0-flash"
    #[arg(long, env = "STUDBUD_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generation API
    #[arg(long, env = "STUDBUD_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

impl ServerConfig {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.api_key.clone(), &self.model, &self.api_base_url)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.bind.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
