//! Static page content around the studio.

use wasm_bindgen::prelude::*;
use web_sys::Document;

const HEADER: &str = r#"
<header class="shell-header">
    <p class="eyebrow">MemoryPhoto · Camera Anywhere</p>
    <h1>Capture memories on laptop or phone without any native app.</h1>
    <p class="intro">
        Give your browser camera permission, snap a photo, download it
        instantly, or upload an existing picture. Works on modern desktop
        browsers, iOS Safari, and Android Chrome.
    </p>
</header>
"#;

const DEPLOY: &str = r#"
<section class="card deploy">
    <h2>How to deploy</h2>
    <ol>
        <li><strong>1. Build the bundle</strong>: run
            <code>wasm-pack build client --target web --out-dir static/pkg</code>.</li>
        <li><strong>2. Publish the static folder</strong>: upload
            <code>client/static</code> to any static host (GitHub Pages,
            Netlify, Vercel, an S3 bucket).</li>
        <li><strong>3. Camera permissions</strong>: serve the site over HTTPS
            so mobile browsers will allow camera access. You're ready to
            share the link.</li>
    </ol>
</section>
"#;

const UNSUPPORTED: &str = r#"
<section class="card unsupported" id="unsupported-notice">
    <h2>Camera not supported</h2>
    <p>
        Your browser does not expose the MediaDevices API. Please update to a
        modern version of Chrome, Safari, Edge, or Firefox.
    </p>
</section>
"#;

const STUDIO: &str = r#"
<section class="card studio" id="studio">
    <div class="live">
        <div class="viewfinder">
            <video id="camera-video" playsinline autoplay muted></video>
            <div class="overlay" id="camera-overlay">
                <p id="camera-overlay-text"></p>
            </div>
        </div>
        <div class="controls">
            <button id="capture-photo" class="primary" disabled>Capture photo</button>
            <button id="switch-camera" class="secondary">Switch camera</button>
            <button id="refresh-camera" class="ghost">Refresh</button>
        </div>
        <div class="error" id="camera-error" hidden></div>
    </div>

    <div class="shots">
        <div class="shots-header">
            <h3>Shots &amp; uploads</h3>
            <p class="mobile-hint">Scroll down after a capture to view the preview and actions.</p>
        </div>
        <div id="photo-preview" hidden>
            <div class="preview-frame" id="preview-frame">
                <img id="preview-image" alt="Captured preview">
            </div>
            <p class="caption" id="preview-caption"></p>
            <div class="preview-actions">
                <button id="download-photo" class="accent">Download JPEG</button>
                <button id="retake-photo" class="secondary">Retake</button>
            </div>
        </div>
        <p id="photo-placeholder" class="placeholder">
            Captured and uploaded photos will appear here. Save them to your
            device or retake a new shot.
        </p>

        <label class="upload">
            Upload an existing image
            <input id="upload-input" type="file" accept="image/*" capture="environment">
        </label>
        <p class="tip">
            Tip: Mobile browsers require HTTPS to access cameras. localhost is
            always allowed.
        </p>
    </div>

    <canvas id="capture-canvas" hidden></canvas>
</section>
"#;

/// Fills `#app` with the page. Without camera support the studio is
/// replaced by a notice.
pub fn render_page(document: &Document, media_supported: bool) -> Result<(), JsValue> {
    let root = document.get_element_by_id("app").ok_or("#app not found")?;
    root.set_inner_html(&page_markup(media_supported));
    Ok(())
}

fn page_markup(media_supported: bool) -> String {
    let body = if media_supported { STUDIO } else { UNSUPPORTED };
    format!(r#"<main class="shell">{}{}{}</main>"#, HEADER, body, DEPLOY)
}
