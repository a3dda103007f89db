//! Bundled overlay document: a reload button plus a drag grip.
//!
//! Dragging reports screen-space deltas through `kioskOverlay.moveBy`, at
//! most once per animation frame. The host moves the window, so deltas are
//! measured in screen coordinates rather than page coordinates.

pub const OVERLAY_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body {
    margin: 0;
    height: 100%;
    overflow: hidden;
    background: transparent;
    font: 600 14px system-ui, -apple-system, "Segoe UI", sans-serif;
    user-select: none;
  }
  .bar {
    box-sizing: border-box;
    display: flex;
    align-items: stretch;
    height: 100%;
    border-radius: 10px;
    background: rgba(24, 28, 36, 0.88);
    color: #f4f6fa;
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.35);
  }
  .grip {
    width: 22px;
    cursor: grab;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0.6;
    touch-action: none;
  }
  .grip.dragging { cursor: grabbing; }
  button {
    flex: 1;
    border: 0;
    border-radius: 0 10px 10px 0;
    background: transparent;
    color: inherit;
    font: inherit;
    cursor: pointer;
  }
  button:hover { background: rgba(255, 255, 255, 0.08); }
  button:active { background: rgba(255, 255, 255, 0.16); }
</style>
</head>
<body>
<div class="bar">
  <div class="grip" id="grip" title="Drag to move">&#8942;&#8942;</div>
  <button id="reload" type="button">&#8635; Reload</button>
</div>
<script>
(function() {
  var api = window.kioskOverlay;
  if (!api) { return; }

  document.getElementById('reload').addEventListener('click', function() {
    api.requestReload();
  });

  var grip = document.getElementById('grip');
  var last = null;
  var pending = { dx: 0, dy: 0 };
  var scheduled = false;

  function flush() {
    scheduled = false;
    if (pending.dx !== 0 || pending.dy !== 0) {
      api.moveBy(pending.dx, pending.dy);
      pending.dx = 0;
      pending.dy = 0;
    }
  }

  grip.addEventListener('pointerdown', function(e) {
    last = { x: e.screenX, y: e.screenY };
    grip.setPointerCapture(e.pointerId);
    grip.classList.add('dragging');
  });
  grip.addEventListener('pointermove', function(e) {
    if (!last) { return; }
    pending.dx += e.screenX - last.x;
    pending.dy += e.screenY - last.y;
    last = { x: e.screenX, y: e.screenY };
    if (!scheduled) {
      scheduled = true;
      requestAnimationFrame(flush);
    }
  });
  function end(e) {
    if (!last) { return; }
    last = null;
    grip.classList.remove('dragging');
    try { grip.releasePointerCapture(e.pointerId); } catch (_) {}
    flush();
  }
  grip.addEventListener('pointerup', end);
  grip.addEventListener('pointercancel', end);
})();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_only_bridge_calls() {
        assert!(OVERLAY_HTML.contains("api.requestReload()"));
        assert!(OVERLAY_HTML.contains("api.moveBy("));
        assert!(!OVERLAY_HTML.contains("window.ipc"));
    }

    #[test]
    fn page_has_no_remote_resources() {
        assert!(!OVERLAY_HTML.contains("http://"));
        assert!(!OVERLAY_HTML.contains("https://"));
    }
}
