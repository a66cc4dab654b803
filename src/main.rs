//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`,
//! then serves `static/` over HTTP and prints the viewer URL.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context, Result};
    use clap::Parser;
    use url::form_urlencoded::byte_serialize;

    #[derive(Debug, Parser)]
    #[command(about = "Build and serve the fullscreen shader viewer")]
    pub struct Args {
        /// Port for the local HTTP server.
        #[arg(long, default_value_t = 8000)]
        pub port: u16,
        /// Fragment shader to open, relative to the page or `shaders/`.
        #[arg(long)]
        pub shader: Option<String>,
        /// Serve whatever is already in `static/pkg`.
        #[arg(long)]
        pub no_build: bool,
    }

    /// The shader path is form-encoded so `URLSearchParams` on the page reads
    /// it back unchanged.
    pub fn viewer_url(port: u16, shader: Option<&str>) -> String {
        match shader {
            Some(shader) => {
                let encoded: String = byte_serialize(shader.as_bytes()).collect();
                format!("http://127.0.0.1:{port}/?shader={encoded}")
            }
            None => format!("http://127.0.0.1:{port}/"),
        }
    }

    fn build_bundle() -> Result<()> {
        log::info!("building WASM pkg …");
        let status = Command::new("wasm-pack")
            .args([
                "build",
                "--release",
                "--target",
                "web",
                "--out-dir",
                "static/pkg",
            ])
            .status()
            .context("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/)")?;
        if !status.success() {
            bail!("wasm-pack finished with {status}");
        }
        Ok(())
    }

    pub fn run(args: Args) -> Result<()> {
        if args.no_build {
            log::warn!("skipping wasm build; the site may serve stale artifacts");
        } else {
            build_bundle()?;
        }

        log::info!("launching local server on port {}", args.port);
        let mut server = Command::new("python3")
            .args(["-m", "http.server", &args.port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to start http server (python3 required)")?;

        println!("{}", viewer_url(args.port, args.shader.as_deref()));

        let status = server.wait().context("http server wait failed")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::viewer_url;

        #[test]
        fn url_carries_shader_query() {
            assert_eq!(
                viewer_url(8080, Some("plasma.frag")),
                "http://127.0.0.1:8080/?shader=plasma.frag"
            );
            assert_eq!(viewer_url(8000, None), "http://127.0.0.1:8000/");
        }

        #[test]
        fn shader_query_survives_reserved_characters() {
            for shader in ["c++ & co.frag", "waves/ocean.frag", "a=b#c?.frag"] {
                let url = viewer_url(8000, Some(shader));
                let query = url.split_once('?').map(|(_, q)| q).unwrap();
                let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect();
                assert_eq!(pairs, vec![("shader".to_string(), shader.to_string())]);
            }
            assert_eq!(
                viewer_url(8000, Some("c++ & co.frag")),
                "http://127.0.0.1:8000/?shader=c%2B%2B+%26+co.frag"
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    host::run(host::Args::parse())
}

// Nothing to launch from inside the browser bundle.
#[cfg(target_arch = "wasm32")]
fn main() {}
