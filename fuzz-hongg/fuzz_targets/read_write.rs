use honggfuzz::fuzz;
use json_nbt::{BigEndian, LittleEndian, deserialize, from_slice, serialize, to_vec};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(value) = from_slice::<BigEndian>(data) {
                if let Ok(bytes) = to_vec::<BigEndian>(&value) {
                    let _ = from_slice::<BigEndian>(&bytes);
                }
                let _ = serialize(&deserialize(&value));
            }
            if let Ok(value) = from_slice::<LittleEndian>(data) {
                let _ = to_vec::<LittleEndian>(&value);
                let _ = to_vec::<BigEndian>(&value);
            }
        });
    }
}
