use anyhow::Result;
use isuumo_core::Isuumo;

#[derive(Debug, Clone, Copy)]
pub(super) struct WebServeOptions<'a> {
    pub(super) host: &'a str,
    pub(super) port: u16,
}

pub(super) fn serve(app: &Isuumo, options: WebServeOptions<'_>) -> Result<()> {
    isuumo_web::serve_web(app.clone(), options.host, options.port)
}
