pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const UPGRADE: &str = "Upgrade";
    pub const PROXY_MARKER: &str = "X-Helius-Cloudflare-Proxy";
}

pub mod method {
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod upstream {
    /// Serves requests for the root path.
    pub const RPC_URL: &str = "https://rpc.helius.xyz";
    /// Serves every path other than the root.
    pub const API_URL: &str = "https://api.helius.xyz";
    /// Receives protocol upgrade requests.
    pub const STREAM_URL: &str = "https://mainnet.helius-rpc.com";
    pub const API_KEY_PARAM: &str = "api-key";
}

pub mod content {
    pub const JSON: &str = "application/json";
    pub const PLAIN_TEXT: &str = "text/plain;charset=UTF-8";
    pub const PROXY_MARKER_VALUE: &str = "true";
    pub const FORBIDDEN_BODY: &str = "Forbidden";
}
