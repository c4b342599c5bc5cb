#![feature(test)]

extern crate test;

use test::Bencher;

use bitfox_chess::board::Board;
use bitfox_chess::movegen::generate_pseudo_legal_moves;

#[bench]
fn bench_generate_startpos(b: &mut Bencher) {
  let board = Board::starting_position();
  b.iter(|| {
    let moves = generate_pseudo_legal_moves(&board);
    test::black_box(moves.len());
  });
}

#[bench]
fn bench_generate_midgame(b: &mut Bencher) {
  let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
  let board = Board::from_fen(fen).unwrap();
  b.iter(|| {
    let moves = generate_pseudo_legal_moves(&board);
    test::black_box(moves.len());
  });
}
