use std::io::Read;

use crate::io::{InMemorySink, InMemorySource, InputProvider, OutputTarget};

#[test]
fn in_memory_source_reopens_from_the_start() {
    let src = InMemorySource::from_string("mem", "kind: Pod\n");

    for _ in 0..2 {
        let mut buf = String::new();
        src.open().unwrap().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "kind: Pod\n");
    }
}

#[test]
fn in_memory_sink_overwrites_in_place() {
    let sink = InMemorySink::new("out");
    sink.write_file("a.yaml", b"1").unwrap();
    sink.write_file("b.yaml", b"2").unwrap();
    sink.write_file("a.yaml", b"3").unwrap();

    assert_eq!(sink.names(), vec!["a.yaml", "b.yaml"]);
    assert_eq!(sink.contents("a.yaml"), Some(b"3".to_vec()));
    assert_eq!(sink.contents_string("b.yaml").as_deref(), Some("2"));
    assert_eq!(sink.contents("c.yaml"), None);
    assert_eq!(sink.len(), 2);
}
