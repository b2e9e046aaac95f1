use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rayon::prelude::*;
use slurp::*;

const SIMPLE_INVITE: &str = "INVITE sip:bob@biloxi.com SIP/2.0\r
Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds\r
Max-Forwards: 70\r
To: Bob <sip:bob@biloxi.com>\r
From: Alice <sip:alice@atlanta.com>;tag=1928301774\r
Call-ID: a84b4c76e66710@pc33.atlanta.com\r
CSeq: 314159 INVITE\r
Contact: <sip:alice@pc33.atlanta.com>\r
Content-Length: 0\r
\r
";

const CARRIER_INVITE: &str = "INVITE sip:967716910167@197.255.224.99;user=phone SIP/2.0\r
From: \"+2693347248\"<sip:+2693347248@197.255.224.100;user=phone>;tag=s26208d1i1z111r290308928\r
To: \"+967716910167\"<sip:967716910167@197.255.224.99;user=phone>\r
Call-ID: 7034cb95-68867afa-17e8fd7-7fc19d58b7d0-6be0ffc5-13c4-7225\r
CSeq: 1 INVITE\r
User-Agent: Orchid 3.1.32.6\r
Supported: 100rel,timer,replaces\r
Max-Forwards: 68\r
Allow: PRACK,BYE,CANCEL,ACK,INVITE,UPDATE,OPTIONS\r
Via: SIP/2.0/UDP 197.255.224.100:5060;rport;branch=z9hG4bK-5801fe38-17e8fd7-d661e03c-7fc1a2273910\r
Contact: <sip:+2693347248@197.255.224.100:5060;transport=UDP;user=phone>;q=1.00, <sip:+2693347248@10.18.49.164>;q=0.5\r
Content-Type: application/sdp\r
Content-Length: 0\r
\r
";

fn parsed(text: &str) -> Invite {
    let mut invite = Invite::new();
    invite
        .parse_with(text, &ParserLimits::default(), &NullSink)
        .expect("sample message should parse");
    invite
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in [("simple", SIMPLE_INVITE), ("carrier", CARRIER_INVITE)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| {
                let mut invite = Invite::new();
                invite
                    .parse_with(black_box(text), &ParserLimits::default(), &NullSink)
                    .ok();
                invite
            })
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for (name, text) in [("simple", SIMPLE_INVITE), ("carrier", CARRIER_INVITE)] {
        let invite = parsed(text);
        group.bench_function(name, |b| b.iter(|| black_box(&invite).render()));
    }
    group.finish();
}

/// Distinct messages share no mutable state, so renders run one per core
fn bench_parallel_render(c: &mut Criterion) {
    let num_cores = num_cpus::get();
    let messages: Vec<Invite> = (0..num_cores * 64).map(|_| parsed(SIMPLE_INVITE)).collect();

    let mut group = c.benchmark_group("parallel_render");
    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function(BenchmarkId::new("cores", num_cores), |b| {
        b.iter(|| {
            messages
                .par_iter()
                .filter_map(|m| m.render().ok())
                .map(|s| s.len())
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_parallel_render);
criterion_main!(benches);
