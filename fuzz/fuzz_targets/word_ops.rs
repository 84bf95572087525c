#![no_main]
use bitword::{naive, BitWord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u32, u8)| {
    let (bits, shift, index) = data;
    let w = BitWord::new(bits);

    assert_eq!(w.count_on() + w.count_off(), 64);
    assert_eq!(w.count_on(), naive::count_ones(bits));

    assert_eq!(w.mirror().mirror(), w);
    assert_eq!(w.mirror().bits(), naive::reverse(bits));

    assert_eq!(w.rotate_left(shift).rotate_right(shift), w);
    assert_eq!(w.rotate_right(shift).bits(), naive::rotate_right(bits, shift));

    let at = index as usize;
    if at < 64 {
        assert!(w.set_on(at).get(at));
        assert!(!w.set_off(at).get(at));
        assert_eq!(w.flip_bit(at).flip_bit(at), w);
    } else {
        assert!(w.try_get(at).is_err());
    }

    assert_eq!(w.to_string().parse::<BitWord>(), Ok(w));
});
