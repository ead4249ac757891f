/// The chrome overlay page: progress bar, loading overlay, offline panel
/// and the "no application" notice. State arrives through
/// `window.rxshell.ipc._dispatch("state", ...)`.
pub const CHROME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; background: transparent; overflow: hidden;
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif; }
  #progress { position: fixed; left: 0; bottom: 0; height: 4px; width: 0;
    background: #2563eb; transition: width 120ms ease-out; }
  .panel { position: fixed; inset: 0; display: none; flex-direction: column;
    align-items: center; justify-content: center; background: #fafafa; color: #18181b; }
  .panel.visible { display: flex; }
  .spinner { width: 36px; height: 36px; border: 3px solid #e4e4e7;
    border-top-color: #2563eb; border-radius: 50%; animation: spin 0.8s linear infinite; }
  @keyframes spin { to { transform: rotate(360deg); } }
  #offline { cursor: pointer; }
  #offline h1 { font-size: 20px; margin: 0 0 8px; }
  #offline p { margin: 0 0 16px; color: #52525b; }
  #offline button { padding: 8px 20px; border: 0; border-radius: 6px;
    background: #2563eb; color: white; font-size: 14px; cursor: pointer; }
  #notice { position: fixed; left: 50%; bottom: 16px; transform: translateX(-50%);
    display: none; padding: 10px 16px; border-radius: 6px;
    background: rgba(24, 24, 27, 0.9); color: white; font-size: 13px; white-space: nowrap; }
  #notice.visible { display: block; }
</style>
</head>
<body>
  <div id="overlay" class="panel"><div class="spinner"></div></div>
  <div id="offline" class="panel">
    <h1>You're offline</h1>
    <p>Check your connection, then tap anywhere to try again.</p>
    <button type="button">Retry</button>
  </div>
  <div id="notice">No application available to open this link.</div>
  <div id="progress"></div>
<script>
(function() {
  function send(kind, payload) {
    window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload === undefined ? null : payload }));
  }
  var handlers = {};
  window.rxshell = {
    ipc: {
      _dispatch: function(kind, payload) {
        var handler = handlers[kind];
        if (handler) handler(payload);
      }
    }
  };
  var noticeTimer = null;
  handlers.state = function(s) {
    var bar = document.getElementById('progress');
    bar.style.width = s.progress + '%';
    bar.style.display = s.progress < 100 ? 'block' : 'none';
    document.getElementById('overlay').classList.toggle('visible', !!s.loading);
    document.getElementById('offline').classList.toggle('visible', !!s.offline);
  };
  handlers.notice = function(n) {
    var el = document.getElementById('notice');
    el.classList.add('visible');
    if (noticeTimer) clearTimeout(noticeTimer);
    noticeTimer = setTimeout(function() { el.classList.remove('visible'); }, n.duration_ms);
  };
  document.getElementById('offline').addEventListener('click', function() { send('retry'); });
  send('ready');
})();
</script>
</body>
</html>
"#;
