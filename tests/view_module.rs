use setupbase::platform::PlatformClient;
use setupbase::setup::SetupCoordinator;
use setupbase::view::{NoopObserver, SetupScreen};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

fn serve_one_config(configured: bool) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    let body = format!(r#"{{"entry":[{{"name":"my_app","content":{{"configured":{configured}}}}}]}}"#);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut request_line = String::new();
        reader
            .read_line(&mut request_line)
            .expect("read request line");
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header");
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
    });

    (format!("http://{addr}"), handle)
}

struct ExampleScreen {
    coordinator: SetupCoordinator,
    rendered: bool,
}

impl SetupScreen for ExampleScreen {
    fn coordinator(&mut self) -> &mut SetupCoordinator {
        &mut self.coordinator
    }

    fn render(&mut self) {
        self.rendered = true;
    }
}

#[test]
fn default_init_loads_app_config() {
    let (base_url, handle) = serve_one_config(false);
    let client = PlatformClient::with_api_base(base_url, "tok".to_string());
    let mut screen = ExampleScreen {
        coordinator: SetupCoordinator::with_app_name(client, "my_app"),
        rendered: false,
    };

    screen.init();
    handle.join().expect("join mock server");

    assert_eq!(screen.coordinator().is_configured(), Some(false));

    screen.render();
    assert!(screen.rendered);

    screen.teardown();
}

#[test]
fn noop_observer_discards_hook_invocations() {
    use setupbase::view::SetupObserver;

    let mut observer = NoopObserver;
    observer.alert("ignored");
    observer.credential_saved(true);
}
