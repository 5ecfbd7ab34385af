//! Simplified move notation.
//!
//! The notation is short algebraic without check marks or disambiguation:
//! `e4`, `exd5`, `Nf3`, `Bxc6`, `O-O`, `O-O-O`, `e8=Q`. Text is split into
//! typed tokens first and the token sequence is then matched against the few
//! legal shapes, producing a [`MoveDescriptor`].

use crate::game_state::chess_rules::{CastleWing, KING_START_COL, KINGSIDE, QUEENSIDE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{col_to_file, file_to_col, rank_to_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    const fn wing(self) -> CastleWing {
        match self {
            CastleSide::Kingside => KINGSIDE,
            CastleSide::Queenside => QUEENSIDE,
        }
    }
}

/// What a notation string asks for, before it is matched against a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDescriptor {
    Castle(CastleSide),
    Standard {
        piece: PieceKind,
        target: Position,
        capture: bool,
        /// Origin file of a pawn capture.
        from_file: Option<u8>,
        promotion: Option<PieceKind>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Piece(PieceKind),
    File(u8),
    Rank(u8),
    Capture,
    Promote,
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    text.chars()
        .map(|ch| match ch {
            'x' => Some(Token::Capture),
            '=' => Some(Token::Promote),
            'a'..='h' => file_to_col(ch).map(Token::File),
            '1'..='8' => rank_to_row(ch).map(Token::Rank),
            _ => PieceKind::from_letter(ch).map(Token::Piece),
        })
        .collect()
}

/// Parses one move. `None` for anything outside the simplified notation.
pub fn parse_simplified_move(text: &str) -> Option<MoveDescriptor> {
    match text.trim() {
        "O-O" => return Some(MoveDescriptor::Castle(CastleSide::Kingside)),
        "O-O-O" => return Some(MoveDescriptor::Castle(CastleSide::Queenside)),
        _ => {}
    }

    let tokens = tokenize(text.trim())?;
    let (body, promotion) = match tokens.as_slice() {
        [body @ .., Token::Promote, Token::Piece(kind)] => (body, Some(*kind)),
        body => (body, None),
    };

    let descriptor = match *body {
        [Token::File(col), Token::Rank(row)] => standard(PieceKind::Pawn, row, col, false, None),
        [Token::File(from), Token::Capture, Token::File(col), Token::Rank(row)] => {
            standard(PieceKind::Pawn, row, col, true, Some(from))
        }
        [Token::Piece(kind), Token::File(col), Token::Rank(row)] => {
            standard(kind, row, col, false, None)
        }
        [Token::Piece(kind), Token::Capture, Token::File(col), Token::Rank(row)] => {
            standard(kind, row, col, true, None)
        }
        _ => return None,
    };

    match (descriptor, promotion) {
        (descriptor, None) => Some(descriptor),
        (
            MoveDescriptor::Standard {
                piece: PieceKind::Pawn,
                target,
                capture,
                from_file,
                ..
            },
            Some(kind),
        ) if !matches!(kind, PieceKind::Pawn | PieceKind::King)
            && (target.row == 0 || target.row == 7) =>
        {
            Some(MoveDescriptor::Standard {
                piece: PieceKind::Pawn,
                target,
                capture,
                from_file,
                promotion: Some(kind),
            })
        }
        _ => None,
    }
}

fn standard(
    piece: PieceKind,
    row: u8,
    col: u8,
    capture: bool,
    from_file: Option<u8>,
) -> MoveDescriptor {
    MoveDescriptor::Standard {
        piece,
        target: Position { row, col },
        capture,
        from_file,
        promotion: None,
    }
}

/// Writes a played move (as stored in the move history) in simplified
/// notation.
pub fn move_to_simplified(mv: &Move) -> String {
    if mv.is_castle {
        return if mv.to.col > mv.from.col {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut out = String::with_capacity(6);
    let capture = mv.is_capture() || mv.is_en_passant;
    match mv.piece.kind.letter() {
        Some(letter) => out.push(letter),
        None if capture => out.push(col_to_file(mv.from.col)),
        None => {}
    }
    if capture {
        out.push('x');
    }
    out.push_str(&mv.to.to_string());
    if mv.is_promotion {
        out.push('=');
        out.push(
            mv.promotion_piece
                .unwrap_or(PieceKind::Queen)
                .letter()
                .unwrap_or('Q'),
        );
    }
    out
}

/// Space-joined history of a game, the key format of the opening book.
pub fn history_to_simplified(game_state: &GameState) -> String {
    game_state
        .move_history
        .iter()
        .map(move_to_simplified)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the single legal move of the side to move matching `descriptor`.
/// `None` when no piece or more than one piece qualifies.
pub fn resolve_descriptor(game_state: &GameState, descriptor: MoveDescriptor) -> Option<Move> {
    let color = game_state.current_player;

    match descriptor {
        MoveDescriptor::Castle(side) => {
            let from = Position::new(color.back_rank(), KING_START_COL)?;
            let king = game_state.piece_at(from)?;
            if king.kind != PieceKind::King || king.color != color {
                return None;
            }
            let to = from.offset(0, 2 * side.wing().king_step)?;
            legal_moves(game_state, from)
                .contains(&to)
                .then(|| Move::new(from, to, king))
        }
        MoveDescriptor::Standard {
            piece: kind,
            target,
            from_file,
            promotion,
            ..
        } => {
            // A pawn push comes from the target's own file.
            let from_file = match (kind, from_file) {
                (PieceKind::Pawn, None) => Some(target.col),
                (_, file) => file,
            };

            let mut candidates = game_state
                .board
                .pieces_of(color)
                .filter(|(from, piece)| {
                    piece.kind == kind && from_file.is_none_or(|file| from.col == file)
                })
                .filter(|(from, _)| legal_moves(game_state, *from).contains(&target));

            let (from, piece) = candidates.next()?;
            if candidates.next().is_some() {
                return None;
            }

            let mv = Move::new(from, target, piece);
            Some(match promotion {
                Some(kind) => mv.with_promotion(kind),
                None => mv,
            })
        }
    }
}

/// Parses `text` and resolves it against the position in one step.
pub fn simplified_to_move(game_state: &GameState, text: &str) -> Option<Move> {
    resolve_descriptor(game_state, parse_simplified_move(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(name: &str) -> Position {
        name.parse().expect("valid square")
    }

    fn play_line(line: &str) -> GameState {
        let mut game = GameState::new_game();
        for token in line.split_whitespace() {
            let mv = simplified_to_move(&game, token).expect("line move resolves");
            game = apply_move(&game, mv).expect("line move applies");
        }
        game
    }

    #[test]
    fn parses_every_shape() {
        assert_eq!(
            parse_simplified_move("e4"),
            Some(MoveDescriptor::Standard {
                piece: PieceKind::Pawn,
                target: sq("e4"),
                capture: false,
                from_file: None,
                promotion: None,
            })
        );
        assert_eq!(
            parse_simplified_move("exd5"),
            Some(MoveDescriptor::Standard {
                piece: PieceKind::Pawn,
                target: sq("d5"),
                capture: true,
                from_file: Some(4),
                promotion: None,
            })
        );
        assert_eq!(
            parse_simplified_move("Bxc6"),
            Some(MoveDescriptor::Standard {
                piece: PieceKind::Bishop,
                target: sq("c6"),
                capture: true,
                from_file: None,
                promotion: None,
            })
        );
        assert_eq!(
            parse_simplified_move("e8=N"),
            Some(MoveDescriptor::Standard {
                piece: PieceKind::Pawn,
                target: sq("e8"),
                capture: false,
                from_file: None,
                promotion: Some(PieceKind::Knight),
            })
        );
        assert_eq!(
            parse_simplified_move("O-O-O"),
            Some(MoveDescriptor::Castle(CastleSide::Queenside))
        );
    }

    #[test]
    fn rejects_text_outside_the_notation() {
        for text in ["", "e9", "Nf3+", "Ngf3", "Ke8=Q", "e5=Q", "i4", "xe4", "0-0"] {
            assert_eq!(parse_simplified_move(text), None, "{text}");
        }
    }

    #[test]
    fn resolves_moves_in_the_start_position() {
        let game = GameState::new_game();
        let knight = simplified_to_move(&game, "Nf3").expect("Nf3 is legal");
        assert_eq!((knight.from, knight.to), (sq("g1"), sq("f3")));

        let pawn = simplified_to_move(&game, "e4").expect("e4 is legal");
        assert_eq!((pawn.from, pawn.to), (sq("e2"), sq("e4")));

        assert_eq!(simplified_to_move(&game, "Nd4"), None);
        assert_eq!(simplified_to_move(&game, "e5"), None);
    }

    #[test]
    fn ambiguous_moves_do_not_resolve() {
        // Both knights can reach d2 after 1. d4 d5 2. Nf3 Nf6 3. e3 e6.
        let game = play_line("d4 d5 Nf3 Nf6 e3 e6");
        assert_eq!(simplified_to_move(&game, "Nd2"), None);
        assert!(simplified_to_move(&game, "Nbd2").is_none());
    }

    #[test]
    fn history_round_trips_through_the_notation() {
        let line = "e4 d5 exd5 Qxd5 Nc3 Qa5 Bc4 Nf6 Nf3 Bg4 O-O";
        let game = play_line(line);
        assert_eq!(history_to_simplified(&game), line);
    }

    #[test]
    fn en_passant_is_written_as_a_pawn_capture() {
        let game = play_line("e4 a6 e5 d5 exd6");
        let last = game.move_history.last().expect("a move was played");
        assert!(last.is_en_passant);
        assert_eq!(move_to_simplified(last), "exd6");
    }
}
